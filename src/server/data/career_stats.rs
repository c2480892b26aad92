//! Career stats records.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::{
    model::db::CareerStatsModel,
    stats::{update::StatsUpdate, StatLine},
};

/// Repository for the one-per-player career stats records.
pub struct CareerStatsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CareerStatsRepository<'a, C> {
    /// Creates a new instance of [`CareerStatsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records career stats for a player
    ///
    /// Fails if the player doesn't exist or already has a stats record.
    pub async fn create(&self, player_id: i32, line: &StatLine) -> Result<CareerStatsModel, DbErr> {
        let now = Utc::now().naive_utc();

        let stats = entity::career_stats::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            games: ActiveValue::Set(line.games),
            at_bats: ActiveValue::Set(line.at_bats),
            runs: ActiveValue::Set(line.runs),
            hits: ActiveValue::Set(line.hits),
            doubles: ActiveValue::Set(line.doubles),
            triples: ActiveValue::Set(line.triples),
            home_runs: ActiveValue::Set(line.home_runs),
            rbis: ActiveValue::Set(line.rbis),
            walks: ActiveValue::Set(line.walks),
            strikeouts: ActiveValue::Set(line.strikeouts),
            stolen_bases: ActiveValue::Set(line.stolen_bases),
            caught_stealing: ActiveValue::Set(line.caught_stealing),
            batting_avg: ActiveValue::Set(line.batting_avg),
            on_base_pct: ActiveValue::Set(line.on_base_pct),
            slugging_pct: ActiveValue::Set(line.slugging_pct),
            ops: ActiveValue::Set(line.ops),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        stats.insert(self.db).await
    }

    /// Gets the career stats of a player
    pub async fn get_by_player_id(
        &self,
        player_id: i32,
    ) -> Result<Option<CareerStatsModel>, DbErr> {
        entity::prelude::CareerStats::find()
            .filter(entity::career_stats::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await
    }

    /// Overwrites the fields carried by `update`, leaving every other field as stored
    ///
    /// Issues a single UPDATE touching only the supplied columns and `updated_at`.
    pub async fn update(
        &self,
        stats: CareerStatsModel,
        update: &StatsUpdate,
    ) -> Result<CareerStatsModel, DbErr> {
        let mut stats_am = stats.into_active_model();
        update.apply(&mut stats_am);
        stats_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        stats_am.update(self.db).await
    }
}
