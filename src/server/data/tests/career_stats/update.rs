//! Tests for CareerStatsRepository::update method.

use super::*;

fn stats_update(body: serde_json::Value) -> StatsUpdate {
    match body {
        serde_json::Value::Object(map) => StatsUpdate::from_json(&map).unwrap(),
        _ => panic!("test body must be a JSON object"),
    }
}

/// Expect only the supplied fields to change
#[tokio::test]
async fn updates_supplied_fields_only() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_player_tables().build().await?;
    let (_, stats) = test
        .player()
        .insert_player_with_stats("Babe Ruth", Position::Outfield, factory::babe_ruth_stats())
        .await?;

    let stats_repo = CareerStatsRepository::new(&test.db);
    let update = stats_update(json!({ "home_runs": 715, "ops": "1.170" }));
    let updated = stats_repo.update(stats.clone(), &update).await?;

    assert_eq!(updated.home_runs, 715);
    assert_eq!(updated.ops.round_dp(3), Decimal::new(1170, 3));
    assert_eq!(updated.hits, stats.hits);
    assert_eq!(updated.walks, stats.walks);
    assert_eq!(updated.caught_stealing, stats.caught_stealing);

    let stored = stats_repo
        .get_by_player_id(stats.player_id)
        .await?
        .expect("stats should exist");
    assert_eq!(stored.home_runs, 715);
    assert_eq!(stored.hits, stats.hits);

    Ok(())
}

/// Expect caught stealing to be cleared when set to null
#[tokio::test]
async fn clears_caught_stealing() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_player_tables().build().await?;
    let (_, stats) = test
        .player()
        .insert_player_with_stats("Babe Ruth", Position::Outfield, factory::babe_ruth_stats())
        .await?;

    let stats_repo = CareerStatsRepository::new(&test.db);
    let update = stats_update(json!({ "caught_stealing": null }));
    let updated = stats_repo.update(stats, &update).await?;

    assert_eq!(updated.caught_stealing, None);

    Ok(())
}
