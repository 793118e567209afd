//! Webhook receive and describe handlers.
//!
//! `POST /webhook` parses the request body as JSON and echoes it back in an
//! acknowledgement envelope. The only side effect is a single diagnostic log
//! line per request carrying the timestamp, method, headers, and body.
//! `GET /webhook` returns a static descriptor of the endpoint.

use std::collections::HashMap;

use axum::{
    http::{HeaderMap, Method},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::error::{ApiError, Result};

/// Acknowledgement returned for a successfully parsed webhook.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookAck {
    /// Always `true` on the success path.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: &'static str,
    /// Server-generated receipt time.
    pub timestamp: DateTime<Utc>,
    /// The payload echoed back verbatim.
    pub received_data: serde_json::Value,
}

/// Static descriptor returned for `GET /webhook`.
#[derive(Debug, Serialize)]
pub struct WebhookInfo {
    /// Endpoint status line.
    pub message: &'static str,
    /// Route path of the receiver.
    pub endpoint: &'static str,
    /// Accepted HTTP method.
    pub method: &'static str,
    /// Usage hint.
    pub description: &'static str,
}

/// Receives a webhook, logs it, and echoes the payload back.
///
/// Accepts any body bytes regardless of content type; the body must parse
/// as JSON. No persistence, no retries, no backpressure.
///
/// # Errors
///
/// Returns 400 with `{success: false, message, error}` when the body is not
/// valid JSON.
#[instrument(name = "receive_webhook", skip(headers, body), fields(content_length = body.len()))]
pub async fn receive_webhook(
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookAck>> {
    let payload: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "webhook body is not valid JSON");
        ApiError::InvalidPayload(e.to_string())
    })?;

    let timestamp = Utc::now();

    info!(
        %timestamp,
        %method,
        headers = ?extract_headers(&headers),
        body = %payload,
        "webhook received"
    );

    Ok(Json(WebhookAck {
        success: true,
        message: "Webhook received successfully",
        timestamp,
        received_data: payload,
    }))
}

/// Describes the webhook endpoint.
///
/// Pure and side-effect free: repeated calls always return the same body.
pub async fn webhook_info() -> Json<WebhookInfo> {
    Json(WebhookInfo {
        message: "Webhook endpoint is active",
        endpoint: "/webhook",
        method: "POST",
        description: "Send POST requests to this endpoint with your payload",
    })
}

/// Extracts headers into a map for the diagnostic log line.
///
/// Values that are not valid UTF-8 are skipped rather than lossily encoded.
fn extract_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for (name, value) in headers {
        if let Ok(value_str) = value.to_str() {
            map.insert(name.as_str().to_string(), value_str.to_string());
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_extraction_preserves_values() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "application/json".parse().unwrap());
        headers.insert("x-demo-source", "test-suite".parse().unwrap());

        let extracted = extract_headers(&headers);

        assert_eq!(extracted.get("content-type").unwrap(), "application/json");
        assert_eq!(extracted.get("x-demo-source").unwrap(), "test-suite");
    }

    #[test]
    fn ack_serializes_with_camel_case_payload_key() {
        let ack = WebhookAck {
            success: true,
            message: "Webhook received successfully",
            timestamp: Utc::now(),
            received_data: serde_json::json!({"event": "ping"}),
        };

        let value = serde_json::to_value(&ack).expect("serialize ack");

        assert_eq!(value["success"], true);
        assert_eq!(value["receivedData"]["event"], "ping");
        assert!(value["timestamp"].is_string());
    }
}
