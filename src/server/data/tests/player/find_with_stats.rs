//! Tests for PlayerRepository::find_with_stats method.

use super::*;

/// Expect only players meeting the condition, in name order
#[tokio::test]
async fn filters_by_stat_threshold() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_legends()
        .with_player_stats("Role Player", Position::SecondBase, factory::mock_stats_model())
        .build()
        .await?;

    let player_repo = PlayerRepository::new(&test.db);
    let players = player_repo
        .find_with_stats(
            Condition::all().add(entity::career_stats::Column::Hits.gte(3000)),
            None,
        )
        .await?;

    let names: Vec<_> = players.iter().map(|(player, _)| player.name.as_str()).collect();
    assert_eq!(names, vec!["Hank Aaron", "Willie Mays"]);

    Ok(())
}

/// Expect position conditions and the limit to apply
#[tokio::test]
async fn applies_player_condition_and_limit() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_legends()
        .with_player("Bench Warmer", Position::Outfield)
        .build()
        .await?;

    let player_repo = PlayerRepository::new(&test.db);
    let players = player_repo
        .find_with_stats(
            Condition::all().add(entity::player::Column::Position.eq(Position::Outfield)),
            Some(1),
        )
        .await?;

    assert_eq!(players.len(), 1);
    assert_eq!(players[0].0.name, "Babe Ruth");

    Ok(())
}
