//! Leaderboards, summaries and threshold queries over career stats.

#[cfg(test)]
mod tests;

use entity::sea_orm_active_enums::Position;
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection};

use crate::{
    model::stats::{ClubDto, HallOfFameDto, LeaderboardDto, StatsSummaryDto, UniqueProfilesDto},
    server::{
        data::player::{PlayerListFilter, PlayerRepository},
        error::Error,
        model::db::{CareerStatsModel, PlayerModel},
        service::view::{list_item_dto, stat_profile_dto},
        stats::{
            field::{LeaderboardStat, ListOrdering},
            summary::summarize,
        },
    },
};

/// Number of leaders returned when the client doesn't supply `limit`
pub const DEFAULT_LEADERBOARD_LIMIT: u64 = 10;

/// Number of players, in name order, considered for unique statistical profiles
pub const UNIQUE_PROFILE_COUNT: u64 = 20;

const UNIQUE_PROFILE_DESCRIPTION: &str = "Advanced metrics and classifications for players";

/// Service for aggregate queries across every player's career stats.
pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    /// Creates a new instance of [`StatsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Top `limit` players ranked descending by `stat`, ties broken by name.
    ///
    /// Unknown stat keys rank by home runs, but the response still echoes the key exactly as
    /// requested.
    pub async fn leaderboard(&self, stat: &str, limit: u64) -> Result<LeaderboardDto, Error> {
        let player_repo = PlayerRepository::new(self.db);

        let resolved = LeaderboardStat::resolve(stat);
        if LeaderboardStat::parse(stat).is_none() {
            tracing::debug!(
                "Unknown leaderboard stat {:?}, ranking by {}",
                stat,
                resolved.key()
            );
        }

        let leaders = player_repo.leaderboard(resolved.column(), limit).await?;

        Ok(LeaderboardDto {
            stat: stat.to_string(),
            limit,
            leaders: leaders
                .iter()
                .map(|(player, stats)| list_item_dto(player, Some(stats)))
                .collect(),
        })
    }

    /// Aggregate summary over every player with stats, optionally at a single position.
    ///
    /// An empty or missing position summarizes everyone and reports `all`. A position code
    /// that matches no known position summarizes an empty set.
    pub async fn stats_summary(&self, position: Option<&str>) -> Result<StatsSummaryDto, Error> {
        let player_repo = PlayerRepository::new(self.db);

        let label = match position {
            None | Some("") => "all".to_string(),
            Some(code) => code.to_string(),
        };

        let condition = match position {
            None | Some("") => Some(Condition::all()),
            Some(code) => Position::from_code(code)
                .map(|position| Condition::all().add(entity::player::Column::Position.eq(position))),
        };

        let rows = match condition {
            Some(condition) => player_repo.find_with_stats(condition, None).await?,
            None => Vec::new(),
        };

        Ok(StatsSummaryDto {
            position: label,
            summary: summarize(rows.iter().map(|(player, stats)| (player, stats))),
        })
    }

    /// Players meeting each of the three hall of fame thresholds.
    ///
    /// The clubs are independent, a player can appear in more than one.
    pub async fn hall_of_fame_candidates(&self) -> Result<HallOfFameDto, Error> {
        use entity::career_stats::Column;

        let player_repo = PlayerRepository::new(self.db);

        let home_run_club = player_repo
            .find_with_stats(Condition::all().add(Column::HomeRuns.gte(500)), None)
            .await?;
        let hit_club = player_repo
            .find_with_stats(
                Condition::all()
                    .add(Column::Hits.gte(3000))
                    .add(Column::BattingAvg.gte(Decimal::new(300, 3))),
                None,
            )
            .await?;
        let ops_club = player_repo
            .find_with_stats(
                Condition::all()
                    .add(Column::Ops.gte(Decimal::new(900, 3)))
                    .add(Column::HomeRuns.gte(400)),
                None,
            )
            .await?;

        Ok(HallOfFameDto {
            home_run_club: club(&home_run_club),
            hit_club: club(&hit_club),
            ops_club: club(&ops_club),
        })
    }

    /// Derived metrics and classification tags for the first players in name order.
    ///
    /// Players in that window without a career stats record have nothing to profile and are
    /// skipped, so fewer than [`UNIQUE_PROFILE_COUNT`] profiles may be returned.
    pub async fn unique_profiles(&self) -> Result<UniqueProfilesDto, Error> {
        let player_repo = PlayerRepository::new(self.db);

        let page = player_repo
            .list(
                &PlayerListFilter::default(),
                ListOrdering::default(),
                UNIQUE_PROFILE_COUNT,
                0,
            )
            .await?;

        Ok(UniqueProfilesDto {
            unique_statistical_profiles: page
                .players
                .iter()
                .filter_map(|(player, stats)| {
                    stats.as_ref().map(|stats| stat_profile_dto(player, stats))
                })
                .collect(),
            description: UNIQUE_PROFILE_DESCRIPTION.to_string(),
        })
    }
}

fn club(members: &[(PlayerModel, CareerStatsModel)]) -> ClubDto {
    ClubDto {
        count: members.len() as u64,
        players: members
            .iter()
            .map(|(player, stats)| list_item_dto(player, Some(stats)))
            .collect(),
    }
}
