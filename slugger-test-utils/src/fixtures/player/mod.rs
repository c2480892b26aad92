//! Player and career stats fixture utilities.
//!
//! Fixtures write directly through the entity layer so repository and service tests exercise
//! their own code paths against a known database state.

pub mod factory;

use chrono::Utc;
use entity::sea_orm_active_enums::Position;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    context::TestContext,
    error::TestError,
    model::{CareerStatsModel, PlayerModel},
};

impl TestContext {
    pub fn player<'a>(&'a mut self) -> PlayerFixtures<'a> {
        PlayerFixtures { setup: self }
    }
}

pub struct PlayerFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> PlayerFixtures<'a> {
    /// Insert a player without career stats.
    pub async fn insert_player(
        &mut self,
        name: &str,
        position: Position,
    ) -> Result<PlayerModel, TestError> {
        let now = Utc::now().naive_utc();

        let player = entity::prelude::Player::insert(entity::player::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            position: ActiveValue::Set(position),
            description: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        self.setup.players.push(player.clone());

        Ok(player)
    }

    /// Insert a career stats record for an existing player.
    ///
    /// Only the raw stat fields of `stats` are used; `id`, `player_id` and timestamps are
    /// assigned on insert.
    pub async fn insert_stats(
        &self,
        player_id: i32,
        stats: CareerStatsModel,
    ) -> Result<CareerStatsModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::CareerStats::insert(entity::career_stats::ActiveModel {
                player_id: ActiveValue::Set(player_id),
                games: ActiveValue::Set(stats.games),
                at_bats: ActiveValue::Set(stats.at_bats),
                runs: ActiveValue::Set(stats.runs),
                hits: ActiveValue::Set(stats.hits),
                doubles: ActiveValue::Set(stats.doubles),
                triples: ActiveValue::Set(stats.triples),
                home_runs: ActiveValue::Set(stats.home_runs),
                rbis: ActiveValue::Set(stats.rbis),
                walks: ActiveValue::Set(stats.walks),
                strikeouts: ActiveValue::Set(stats.strikeouts),
                stolen_bases: ActiveValue::Set(stats.stolen_bases),
                caught_stealing: ActiveValue::Set(stats.caught_stealing),
                batting_avg: ActiveValue::Set(stats.batting_avg),
                on_base_pct: ActiveValue::Set(stats.on_base_pct),
                slugging_pct: ActiveValue::Set(stats.slugging_pct),
                ops: ActiveValue::Set(stats.ops),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a player together with their career stats.
    pub async fn insert_player_with_stats(
        &mut self,
        name: &str,
        position: Position,
        stats: CareerStatsModel,
    ) -> Result<(PlayerModel, CareerStatsModel), TestError> {
        let player = self.insert_player(name, position).await?;
        let stats = self.insert_stats(player.id, stats).await?;

        Ok((player, stats))
    }
}
