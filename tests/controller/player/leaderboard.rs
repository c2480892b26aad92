//! Tests for the leaderboard endpoint.

use slugger::server::controller::player::{leaderboard, LeaderboardParams};

use super::*;

/// Expect home runs and a limit of 10 when no parameters are given
#[tokio::test]
async fn defaults_to_home_runs() -> Result<(), TestError> {
    let test = legends().await?;

    let resp = leaderboard(
        State(test.to_app_state()),
        Query(LeaderboardParams::default()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["stat"], "home_runs");
    assert_eq!(body["limit"], 10);
    assert_eq!(body["leaders"][0]["name"], "Hank Aaron");
    assert_eq!(body["leaders"][2]["name"], "Willie Mays");

    Ok(())
}

/// Expect an unknown stat to be echoed while ranking by home runs
#[tokio::test]
async fn echoes_unknown_stat() -> Result<(), TestError> {
    let test = legends().await?;

    let resp = leaderboard(
        State(test.to_app_state()),
        Query(LeaderboardParams {
            stat: Some("invalid_stat".to_string()),
            limit: Some(2),
        }),
    )
    .await
    .into_response();

    let body = json_body(resp).await;
    assert_eq!(body["stat"], "invalid_stat");
    assert_eq!(body["leaders"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["leaders"][0]["name"], "Hank Aaron");

    Ok(())
}

/// Expect 200 for a limit at the top of the unsigned range
#[tokio::test]
async fn accepts_max_limit() -> Result<(), TestError> {
    let test = legends().await?;

    let resp = leaderboard(
        State(test.to_app_state()),
        Query(LeaderboardParams {
            stat: None,
            limit: Some(u64::MAX),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["limit"], u64::MAX);
    assert_eq!(body["leaders"].as_array().map(Vec::len), Some(3));

    Ok(())
}
