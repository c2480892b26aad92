//! Tests for CareerStatsRepository::create method.

use super::*;

/// Expect Ok when recording stats for a player without any
#[tokio::test]
async fn creates_stats_for_player() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_player("Babe Ruth", Position::Outfield)
        .build()
        .await?;
    let ruth = test.player_by_name("Babe Ruth")?;

    let stats_repo = CareerStatsRepository::new(&test.db);
    let line = StatLine::from(&factory::babe_ruth_stats());
    let result = stats_repo.create(ruth.id, &line).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert_eq!(created.player_id, ruth.id);
    assert_eq!(created.home_runs, 714);
    assert_eq!(created.caught_stealing, Some(117));
    assert_eq!(created.batting_avg.round_dp(3), Decimal::new(342, 3));

    Ok(())
}

/// Expect Error when a player already has a stats record
#[tokio::test]
async fn fails_for_second_stats_record() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_legends()
        .build()
        .await?;
    let ruth = test.player_by_name("Babe Ruth")?;

    let stats_repo = CareerStatsRepository::new(&test.db);
    let line = StatLine::from(&factory::mock_stats_model());
    let result = stats_repo.create(ruth.id, &line).await;

    assert!(result.is_err());

    Ok(())
}

/// Expect Error when the player doesn't exist
#[tokio::test]
async fn fails_for_nonexistent_player() -> Result<(), TestError> {
    let test = TestBuilder::new().with_player_tables().build().await?;

    let stats_repo = CareerStatsRepository::new(&test.db);
    let line = StatLine::from(&factory::mock_stats_model());
    let result = stats_repo.create(1, &line).await;

    assert!(result.is_err());

    Ok(())
}
