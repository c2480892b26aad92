//! Tests for request routing through the full router.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::json;
use slugger::server::{model::app::AppState, router::routes};
use slugger_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::json_body;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

/// Expect the health probe to be served at `/health/`
#[tokio::test]
async fn routes_health() -> Result<(), TestError> {
    let test = TestBuilder::new().with_player_tables().build().await?;
    let app = routes().with_state(test.to_app_state::<AppState>());

    let resp = app.oneshot(get("/health/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["status"], "ok");

    Ok(())
}

/// Expect fixed collection routes to win over the player ID route
#[tokio::test]
async fn static_routes_take_priority_over_ids() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_legends()
        .build()
        .await?;
    let app = routes().with_state(test.to_app_state::<AppState>());

    let resp = app
        .clone()
        .oneshot(get("/players/leaderboard/?stat=stolen_bases&limit=1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["stat"], "stolen_bases");
    assert_eq!(body["leaders"][0]["name"], "Willie Mays");

    let resp = app
        .clone()
        .oneshot(get("/players/hall_of_fame_candidates/"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(get("/players/stats_summary/?position=OF"))
        .await
        .unwrap();
    assert_eq!(json_body(resp).await["summary"]["total_players"], 2);

    Ok(())
}

/// Expect a JSON body to be posted through to the stats update
#[tokio::test]
async fn routes_stats_update() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_legends()
        .build()
        .await?;
    let mays = test.player_by_name("Willie Mays")?;
    let app = routes().with_state(test.to_app_state::<AppState>());

    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("/players/{}/update_stats/", mays.id))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"stolen_bases": 339}).to_string()))
        .expect("Failed to build request");

    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["career_stats"]["stolen_bases"], 339);

    Ok(())
}

/// Expect a non-numeric leaderboard limit to be rejected
#[tokio::test]
async fn rejects_malformed_limit() -> Result<(), TestError> {
    let test = TestBuilder::new().with_player_tables().build().await?;
    let app = routes().with_state(test.to_app_state::<AppState>());

    let resp = app
        .oneshot(get("/players/leaderboard/?limit=many"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
