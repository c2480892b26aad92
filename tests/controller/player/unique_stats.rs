//! Tests for the unique_stats endpoint.

use slugger::server::controller::player::unique_stats;

use super::*;

/// Expect a profile per player with metrics and classification labels
#[tokio::test]
async fn returns_profiles() -> Result<(), TestError> {
    let test = legends().await?;

    let resp = unique_stats(State(test.to_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(
        body["description"],
        "Advanced metrics and classifications for players"
    );
    let mays = &body["unique_statistical_profiles"][2];
    assert_eq!(mays["name"], "Willie Mays");
    assert_eq!(mays["position"], "Center Field");
    assert_eq!(mays["metrics"]["extra_base_hits"], 523 + 140 + 660);
    assert!(mays["classifications"].is_array());

    Ok(())
}
