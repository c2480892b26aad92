//! Tests for PlayerRepository::create method.

use super::*;

/// Expect Ok with the stored fields when creating a new player
#[tokio::test]
async fn creates_player() -> Result<(), TestError> {
    let test = TestBuilder::new().with_player_tables().build().await?;

    let player_repo = PlayerRepository::new(&test.db);
    let result = player_repo
        .create(
            "Ken Griffey Jr.",
            Position::CenterField,
            Some("The Kid".to_string()),
        )
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert_eq!(created.name, "Ken Griffey Jr.");
    assert_eq!(created.position, Position::CenterField);
    assert_eq!(created.description.as_deref(), Some("The Kid"));

    Ok(())
}

/// Expect Error when creating a second player with the same name
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_player("Babe Ruth", Position::Outfield)
        .build()
        .await?;

    let player_repo = PlayerRepository::new(&test.db);
    let result = player_repo
        .create("Babe Ruth", Position::Pitcher, None)
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Expect Error when the player table doesn't exist
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let player_repo = PlayerRepository::new(&test.db);
    let result = player_repo
        .create("Babe Ruth", Position::Outfield, None)
        .await;

    assert!(result.is_err());

    Ok(())
}
