//! HTTP request handlers for the hookecho API.
//!
//! Handlers are grouped by functionality:
//! - `webhook` - JSON echo receiver and endpoint descriptor
//! - `collection` - Postman collection download and legacy redirect
//! - `responses` - illustrative sample capture data for the demo UI
//! - `health` - liveness probe
//!
//! Every handler is single-shot and stateless. Failures surface as
//! [`crate::ApiError`] values, which carry the wire shape of the error
//! bodies; handlers log the specific cause before returning.

pub mod collection;
pub mod health;
pub mod responses;
pub mod webhook;

pub use collection::{download_collection, legacy_collection_redirect};
pub use health::health_check;
pub use responses::list_responses;
pub use webhook::{receive_webhook, webhook_info};
