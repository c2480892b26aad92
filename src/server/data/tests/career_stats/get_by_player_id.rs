//! Tests for CareerStatsRepository::get_by_player_id method.

use super::*;

/// Expect Ok(Some) for a player with stats
#[tokio::test]
async fn finds_stats_for_player() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_legends()
        .build()
        .await?;
    let aaron = test.player_by_name("Hank Aaron")?;

    let stats_repo = CareerStatsRepository::new(&test.db);
    let result = stats_repo.get_by_player_id(aaron.id).await?;

    assert_eq!(result.map(|stats| stats.home_runs), Some(755));

    Ok(())
}

/// Expect Ok(None) for a player without stats
#[tokio::test]
async fn returns_none_for_player_without_stats() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_player("Bench Warmer", Position::Catcher)
        .build()
        .await?;
    let bench_warmer = test.player_by_name("Bench Warmer")?;

    let stats_repo = CareerStatsRepository::new(&test.db);
    let result = stats_repo.get_by_player_id(bench_warmer.id).await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}
