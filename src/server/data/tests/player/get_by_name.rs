//! Tests for PlayerRepository::get_by_name method.

use super::*;

/// Expect Ok(Some) for an exact name match
#[tokio::test]
async fn finds_player_by_exact_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_legends()
        .build()
        .await?;
    let mays = test.player_by_name("Willie Mays")?;

    let player_repo = PlayerRepository::new(&test.db);
    let result = player_repo.get_by_name("Willie Mays").await?;

    assert_eq!(result.map(|player| player.id), Some(mays.id));

    Ok(())
}

/// Expect Ok(None) for a partial name
#[tokio::test]
async fn returns_none_for_partial_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_legends()
        .build()
        .await?;

    let player_repo = PlayerRepository::new(&test.db);
    let result = player_repo.get_by_name("Willie").await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}
