//! Illustrative sample capture data for the demo UI.
//!
//! There is no capture pipeline. The records returned here are display-only
//! mock data with no relationship to requests the receiver has actually
//! seen; the demo UI renders them as if they were live traffic.

use std::collections::HashMap;

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

/// A simulated webhook capture record.
#[derive(Debug, Serialize)]
pub struct CapturedResponse {
    /// Display identifier.
    pub id: String,
    /// Simulated receipt time.
    pub timestamp: DateTime<Utc>,
    /// HTTP method of the simulated request.
    pub method: String,
    /// Headers of the simulated request.
    pub headers: HashMap<String, String>,
    /// Body of the simulated request.
    pub body: serde_json::Value,
    /// Simulated response status.
    pub status: u16,
}

/// Envelope for the sample capture list.
#[derive(Debug, Serialize)]
pub struct ResponseList {
    /// Always `true`; the list is static.
    pub success: bool,
    /// The sample records.
    pub responses: Vec<CapturedResponse>,
    /// Number of records in `responses`.
    pub count: usize,
}

/// Returns the sample capture list.
pub async fn list_responses() -> Json<ResponseList> {
    let responses = sample_responses();
    let count = responses.len();

    Json(ResponseList { success: true, responses, count })
}

fn sample_responses() -> Vec<CapturedResponse> {
    let headers = HashMap::from([
        ("content-type".to_string(), "application/json".to_string()),
        ("user-agent".to_string(), "PostmanRuntime/7.45.0".to_string()),
    ]);

    vec![CapturedResponse {
        id: "1".to_string(),
        timestamp: Utc::now(),
        method: "POST".to_string(),
        headers,
        body: json!({
            "event": "user.created",
            "data": {
                "userId": "12345",
                "email": "user@example.com",
                "name": "John Doe"
            }
        }),
        status: 200,
    }]
}
