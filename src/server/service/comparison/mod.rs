//! Side-by-side comparison of two players' career stats.

#[cfg(test)]
mod tests;

use rust_decimal::{prelude::FromPrimitive, Decimal};
use sea_orm::DatabaseConnection;

use crate::{
    model::stats::{ComparisonDto, CountComparisonDto, MetricComparisonsDto, RateComparisonDto},
    server::{
        data::player::PlayerRepository,
        error::{player::PlayerError, Error},
        model::db::{CareerStatsModel, PlayerModel},
        service::{player::parse_player_id, view::player_dto},
        stats::{
            formula::{decimal_to_f64, round_to},
            StatLine,
        },
    },
};

/// Service comparing two players metric by metric.
pub struct ComparisonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComparisonService<'a> {
    /// Creates a new instance of [`ComparisonService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Compares two players, `difference = player1 - player2` for every metric.
    ///
    /// Comparing a player with themselves is allowed and yields zero differences.
    ///
    /// # Arguments
    /// - `player1` - First player ID exactly as supplied in the query string
    /// - `player2` - Second player ID exactly as supplied in the query string
    ///
    /// # Returns
    /// - `Ok(ComparisonDto)` - Both players with their metric comparisons
    /// - `Err(Error::PlayerError(MissingComparisonParams))` - Either ID is missing or empty
    /// - `Err(Error::PlayerError(ComparisonPlayersNotFound))` - Either ID isn't an integer,
    ///   doesn't exist, or belongs to a player without stats
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn compare(
        &self,
        player1: Option<&str>,
        player2: Option<&str>,
    ) -> Result<ComparisonDto, Error> {
        let (player1, player2) = match (player1, player2) {
            (Some(player1), Some(player2)) if !player1.is_empty() && !player2.is_empty() => {
                (player1, player2)
            }
            _ => return Err(PlayerError::MissingComparisonParams.into()),
        };

        let not_found = || {
            PlayerError::ComparisonPlayersNotFound(player1.to_string(), player2.to_string())
        };

        let (first, first_stats) = self.find(player1).await?.ok_or_else(not_found)?;
        let (second, second_stats) = self.find(player2).await?.ok_or_else(not_found)?;

        let comparison = compare_metrics(
            &StatLine::from(&first_stats),
            &StatLine::from(&second_stats),
        );

        Ok(ComparisonDto {
            player1: player_dto(first, Some(first_stats)),
            player2: player_dto(second, Some(second_stats)),
            comparison,
        })
    }

    async fn find(
        &self,
        player_id: &str,
    ) -> Result<Option<(PlayerModel, CareerStatsModel)>, Error> {
        let player_repo = PlayerRepository::new(self.db);

        let Ok(id) = parse_player_id(player_id) else {
            return Ok(None);
        };

        Ok(player_repo
            .get_by_id(id)
            .await?
            .and_then(|(player, stats)| stats.map(|stats| (player, stats))))
    }
}

/// Metric by metric comparison of two stat lines
pub fn compare_metrics(first: &StatLine, second: &StatLine) -> MetricComparisonsDto {
    let first_derived = first.derived();
    let second_derived = second.derived();

    MetricComparisonsDto {
        home_runs: count(first.home_runs, second.home_runs),
        batting_avg: rate(first.batting_avg, second.batting_avg),
        ops: rate(first.ops, second.ops),
        stolen_bases: count(first.stolen_bases, second.stolen_bases),
        power_speed_number: ratio(
            first_derived.power_speed_number,
            second_derived.power_speed_number,
            2,
        ),
        walk_to_strikeout_ratio: ratio(
            first_derived.walk_to_strikeout_ratio,
            second_derived.walk_to_strikeout_ratio,
            3,
        ),
    }
}

fn count(first: i32, second: i32) -> CountComparisonDto {
    CountComparisonDto {
        player1: first,
        player2: second,
        difference: first - second,
    }
}

fn rate(first: Decimal, second: Decimal) -> RateComparisonDto {
    RateComparisonDto {
        player1: decimal_to_f64(first),
        player2: decimal_to_f64(second),
        difference: decimal_to_f64(first - second),
    }
}

// Derived ratios are already rounded to `dp` places, so their difference is exact at `dp`
fn ratio(first: f64, second: f64, dp: u32) -> RateComparisonDto {
    let difference = match (Decimal::from_f64(first), Decimal::from_f64(second)) {
        (Some(first), Some(second)) => round_to(first - second, dp),
        _ => first - second,
    };

    RateComparisonDto {
        player1: first,
        player2: second,
        difference,
    }
}
