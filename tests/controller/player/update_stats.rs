//! Tests for the update_stats endpoint.

use serde_json::{Map, Value};
use slugger::server::controller::player::update_stats;

use super::*;

fn body(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("test body must be a JSON object"),
    }
}

/// Expect 200 with the new values and recomputed derived metrics
#[tokio::test]
async fn updates_supplied_fields() -> Result<(), TestError> {
    let test = legends().await?;
    let ruth = test.player_by_name("Babe Ruth")?;

    let resp = update_stats(
        State(test.to_app_state()),
        Path(ruth.id.to_string()),
        Json(body(json!({"home_runs": 715, "slugging_pct": "0.700"}))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["career_stats"]["home_runs"], 715);
    assert_eq!(body["career_stats"]["hits"], 2873);
    assert_eq!(body["career_stats"]["isolated_power"], 0.358);

    Ok(())
}

/// Expect 400 listing each rejected field
#[tokio::test]
async fn invalid_values_are_rejected() -> Result<(), TestError> {
    let test = legends().await?;
    let ruth = test.player_by_name("Babe Ruth")?;

    let resp = update_stats(
        State(test.to_app_state()),
        Path(ruth.id.to_string()),
        Json(body(json!({"home_runs": -5, "batting_avg": 1.5}))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Invalid stat values");
    assert!(body["fields"]["home_runs"].is_string());
    assert!(body["fields"]["batting_avg"].is_string());

    Ok(())
}

/// Expect 404 for an unknown player and for a player without stats
#[tokio::test]
async fn missing_player_or_stats_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_player("Bench Warmer", Position::Catcher)
        .build()
        .await?;
    let bench = test.player_by_name("Bench Warmer")?;

    for id in ["999".to_string(), bench.id.to_string()] {
        let resp = update_stats(
            State(test.to_app_state()),
            Path(id),
            Json(body(json!({"home_runs": 1}))),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    Ok(())
}
