//! Tests for the health endpoint.

use slugger::server::controller::health::health;

use super::*;

/// Expect 200 with the fixed status payload
#[tokio::test]
async fn returns_running_status() -> Result<(), TestError> {
    let resp = health().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        json!({"status": "ok", "message": "Baseball API is running!"})
    );

    Ok(())
}
