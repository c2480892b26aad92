//! Helpers shared across integration tests.

use axum::{body::to_bytes, response::Response};
use serde_json::Value;

/// Read a response body and parse it as JSON.
pub async fn json_body(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not valid JSON")
}
