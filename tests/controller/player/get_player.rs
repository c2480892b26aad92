//! Tests for the get_player endpoint.

use slugger::server::controller::player::get_player;

use super::*;

/// Expect 200 with raw and derived career stats
#[tokio::test]
async fn returns_player_details() -> Result<(), TestError> {
    let test = legends().await?;
    let ruth = test.player_by_name("Babe Ruth")?;

    let resp = get_player(State(test.to_app_state()), Path(ruth.id.to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["id"], ruth.id);
    assert_eq!(body["name"], "Babe Ruth");
    assert_eq!(body["career_stats"]["home_runs"], 714);
    assert_eq!(body["career_stats"]["batting_avg"], 0.342);
    assert_eq!(body["career_stats"]["singles"], 1517);
    assert_eq!(body["career_stats"]["power_speed_number"], 209.85);

    Ok(())
}

/// Expect null career stats for a player without a stats record
#[tokio::test]
async fn player_without_stats() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_player("Bench Warmer", Position::Catcher)
        .build()
        .await?;
    let player = test.player_by_name("Bench Warmer")?;

    let resp = get_player(State(test.to_app_state()), Path(player.id.to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["career_stats"], json!(null));

    Ok(())
}

/// Expect 404 for unknown and non-numeric IDs
#[tokio::test]
async fn unknown_player_is_not_found() -> Result<(), TestError> {
    let test = legends().await?;

    for id in ["999", "abc"] {
        let resp = get_player(State(test.to_app_state()), Path(id.to_string()))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(resp).await, json!({"error": "Player not found"}));
    }

    Ok(())
}
