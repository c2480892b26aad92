//! Tests for the compare endpoint.

use slugger::server::controller::player::{compare, CompareParams};

use super::*;

/// Expect 200 with both players and the metric differences
#[tokio::test]
async fn compares_players() -> Result<(), TestError> {
    let test = legends().await?;
    let aaron = test.player_by_name("Hank Aaron")?;
    let mays = test.player_by_name("Willie Mays")?;

    let resp = compare(
        State(test.to_app_state()),
        Query(CompareParams {
            player1: Some(aaron.id.to_string()),
            player2: Some(mays.id.to_string()),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["player1"]["name"], "Hank Aaron");
    assert_eq!(body["player2"]["name"], "Willie Mays");
    assert_eq!(
        body["comparison"]["home_runs"],
        json!({"player1": 755, "player2": 660, "difference": 95})
    );
    assert_eq!(body["comparison"]["stolen_bases"]["difference"], -98);
    assert_eq!(
        body["comparison"]["walks_vs_strikeouts"]["player1"],
        json!(1.014)
    );
    assert!(body["comparison"].get("walk_to_strikeout_ratio").is_none());

    Ok(())
}

/// Expect 400 when a player ID is missing
#[tokio::test]
async fn missing_ids_are_bad_request() -> Result<(), TestError> {
    let test = legends().await?;

    let resp = compare(
        State(test.to_app_state()),
        Query(CompareParams {
            player1: Some("1".to_string()),
            player2: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(resp).await,
        json!({"error": "Both player1 and player2 IDs are required"})
    );

    Ok(())
}

/// Expect 404 when either player doesn't exist
#[tokio::test]
async fn unknown_player_is_not_found() -> Result<(), TestError> {
    let test = legends().await?;
    let aaron = test.player_by_name("Hank Aaron")?;

    let resp = compare(
        State(test.to_app_state()),
        Query(CompareParams {
            player1: Some(aaron.id.to_string()),
            player2: Some("999".to_string()),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(resp).await,
        json!({"error": "One or both players not found"})
    );

    Ok(())
}
