//! Tests for the stats_summary endpoint.

use slugger::server::controller::player::{stats_summary, StatsSummaryParams};

use super::*;

/// Expect a summary across every player when no position is given
#[tokio::test]
async fn summarizes_everyone() -> Result<(), TestError> {
    let test = legends().await?;

    let resp = stats_summary(
        State(test.to_app_state()),
        Query(StatsSummaryParams::default()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["position"], "all");
    assert_eq!(body["summary"]["total_players"], 3);
    assert_eq!(body["summary"]["home_runs"]["average"], 709.67);
    assert_eq!(body["summary"]["home_runs"]["leader"], "Hank Aaron");
    assert_eq!(body["summary"]["batting_average"]["average"], 0.316);
    assert_eq!(body["summary"]["stolen_bases"]["max"], 338);

    Ok(())
}

/// Expect null leaders for a position without players
#[tokio::test]
async fn empty_position_has_no_leaders() -> Result<(), TestError> {
    let test = legends().await?;

    let resp = stats_summary(
        State(test.to_app_state()),
        Query(StatsSummaryParams {
            position: Some("C".to_string()),
        }),
    )
    .await
    .into_response();

    let body = json_body(resp).await;
    assert_eq!(body["position"], "C");
    assert_eq!(body["summary"]["total_players"], 0);
    assert_eq!(body["summary"]["ops"]["leader"], json!(null));

    Ok(())
}
