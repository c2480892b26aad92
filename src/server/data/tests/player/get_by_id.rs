//! Tests for PlayerRepository::get_by_id method.

use super::*;

/// Expect Ok(Some) with stats attached for a player with a stats record
#[tokio::test]
async fn finds_player_with_stats() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_legends()
        .build()
        .await?;
    let ruth = test.player_by_name("Babe Ruth")?;

    let player_repo = PlayerRepository::new(&test.db);
    let result = player_repo.get_by_id(ruth.id).await?;

    let (player, stats) = result.expect("player should exist");
    assert_eq!(player.name, "Babe Ruth");
    let stats = stats.expect("stats should exist");
    assert_eq!(stats.player_id, ruth.id);
    assert_eq!(stats.home_runs, 714);

    Ok(())
}

/// Expect Ok(Some) with no stats for a player without a stats record
#[tokio::test]
async fn finds_player_without_stats() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_player("Bench Warmer", Position::Catcher)
        .build()
        .await?;
    let bench_warmer = test.player_by_name("Bench Warmer")?;

    let player_repo = PlayerRepository::new(&test.db);
    let result = player_repo.get_by_id(bench_warmer.id).await?;

    assert!(matches!(result, Some((_, None))));

    Ok(())
}

/// Expect Ok(None) for an ID that doesn't exist
#[tokio::test]
async fn returns_none_for_nonexistent_player() -> Result<(), TestError> {
    let test = TestBuilder::new().with_player_tables().build().await?;

    let player_repo = PlayerRepository::new(&test.db);
    let result = player_repo.get_by_id(1).await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}
