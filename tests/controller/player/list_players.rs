//! Tests for the list_players endpoint.

use slugger::server::controller::player::{list_players, PlayerListParams};

use super::*;

/// Expect 200 with every player in name order and no neighbouring pages
#[tokio::test]
async fn lists_players_by_name() -> Result<(), TestError> {
    let test = legends().await?;

    let resp = list_players(
        State(test.to_app_state()),
        Query(PlayerListParams::default()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["next"], json!(null));
    assert_eq!(body["previous"], json!(null));
    assert_eq!(body["results"][0]["name"], "Babe Ruth");
    assert_eq!(body["results"][0]["position"], "OF");
    assert_eq!(body["results"][0]["position_display"], "Outfield");
    assert_eq!(body["results"][0]["hits_per_game"], 1.148);

    Ok(())
}

/// Expect filters and ordering to be applied and echoed in page links
#[tokio::test]
async fn filters_orders_and_links() -> Result<(), TestError> {
    let test = legends().await?;

    let resp = list_players(
        State(test.to_app_state()),
        Query(PlayerListParams {
            limit: Some(1),
            position: Some("OF".to_string()),
            ordering: Some("-home_runs".to_string()),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["results"][0]["name"], "Hank Aaron");
    assert_eq!(
        body["next"],
        "/players/?limit=1&position=OF&ordering=-home_runs&page=2"
    );

    Ok(())
}

/// Expect case-insensitive name search
#[tokio::test]
async fn searches_by_name() -> Result<(), TestError> {
    let test = legends().await?;

    let resp = list_players(
        State(test.to_app_state()),
        Query(PlayerListParams {
            search: Some("MAYS".to_string()),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    let body = json_body(resp).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["name"], "Willie Mays");

    Ok(())
}

/// Expect 404 for a page past the end
#[tokio::test]
async fn invalid_page_is_not_found() -> Result<(), TestError> {
    let test = legends().await?;

    let resp = list_players(
        State(test.to_app_state()),
        Query(PlayerListParams {
            page: Some(5),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await, json!({"error": "Invalid page."}));

    Ok(())
}

/// Expect 400 for an unknown position code
#[tokio::test]
async fn unknown_position_is_bad_request() -> Result<(), TestError> {
    let test = legends().await?;

    let resp = list_players(
        State(test.to_app_state()),
        Query(PlayerListParams {
            position: Some("XX".to_string()),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
