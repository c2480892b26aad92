//! Derived batting metrics.
//!
//! Each metric is a closed-form function of a single [`StatLine`]. Division by zero never
//! fails: every ratio has a defined fallback value so players with degenerate totals (a
//! pitcher with no at-bats, a slugger who never attempted a steal) still serialize to plain
//! JSON numbers.

use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal, RoundingStrategy,
};

use crate::server::model::db::CareerStatsModel;

/// Snapshot of the raw fields of a career stats record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLine {
    /// Games played
    pub games: i32,
    /// At-bats
    pub at_bats: i32,
    /// Runs scored
    pub runs: i32,
    /// Hits of any kind
    pub hits: i32,
    /// Doubles
    pub doubles: i32,
    /// Triples
    pub triples: i32,
    /// Home runs
    pub home_runs: i32,
    /// Runs batted in
    pub rbis: i32,
    /// Walks
    pub walks: i32,
    /// Strikeouts
    pub strikeouts: i32,
    /// Stolen bases
    pub stolen_bases: i32,
    /// Times caught stealing, `None` when it was never tracked
    pub caught_stealing: Option<i32>,
    /// Batting average, three decimal places
    pub batting_avg: Decimal,
    /// On-base percentage, three decimal places
    pub on_base_pct: Decimal,
    /// Slugging percentage, three decimal places
    pub slugging_pct: Decimal,
    /// On-base plus slugging, three decimal places
    pub ops: Decimal,
}

/// Every derived metric of a [`StatLine`], computed in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedStats {
    /// See [`StatLine::singles`]
    pub singles: i64,
    /// See [`StatLine::total_bases`]
    pub total_bases: i64,
    /// See [`StatLine::extra_base_hits`]
    pub extra_base_hits: i64,
    /// See [`StatLine::power_speed_number`]
    pub power_speed_number: f64,
    /// See [`StatLine::isolated_power`]
    pub isolated_power: f64,
    /// See [`StatLine::walk_to_strikeout_ratio`]
    pub walk_to_strikeout_ratio: f64,
    /// See [`StatLine::stolen_base_pct`]
    pub stolen_base_pct: f64,
    /// See [`StatLine::home_run_rate`]
    pub home_run_rate: f64,
    /// See [`StatLine::hits_per_game`]
    pub hits_per_game: f64,
    /// See [`StatLine::plate_appearances`]
    pub plate_appearances: i64,
}

impl From<&CareerStatsModel> for StatLine {
    fn from(model: &CareerStatsModel) -> Self {
        Self {
            games: model.games,
            at_bats: model.at_bats,
            runs: model.runs,
            hits: model.hits,
            doubles: model.doubles,
            triples: model.triples,
            home_runs: model.home_runs,
            rbis: model.rbis,
            walks: model.walks,
            strikeouts: model.strikeouts,
            stolen_bases: model.stolen_bases,
            caught_stealing: model.caught_stealing,
            batting_avg: model.batting_avg.round_dp(3),
            on_base_pct: model.on_base_pct.round_dp(3),
            slugging_pct: model.slugging_pct.round_dp(3),
            ops: model.ops.round_dp(3),
        }
    }
}

impl StatLine {
    /// Hits that were neither doubles, triples nor home runs.
    ///
    /// Not clamped: a record with more extra-base hits than hits yields a negative count.
    ///
    /// Counting metrics are widened to `i64` so stored `i32` totals of any size never overflow.
    pub fn singles(&self) -> i64 {
        i64::from(self.hits) - self.extra_base_hits()
    }

    /// `1B + 2*2B + 3*3B + 4*HR`
    pub fn total_bases(&self) -> i64 {
        self.singles()
            + i64::from(self.doubles) * 2
            + i64::from(self.triples) * 3
            + i64::from(self.home_runs) * 4
    }

    /// `2B + 3B + HR`
    pub fn extra_base_hits(&self) -> i64 {
        i64::from(self.doubles) + i64::from(self.triples) + i64::from(self.home_runs)
    }

    /// Power-speed number `2 * HR * SB / (HR + SB)`, two decimal places.
    ///
    /// Returns 0 when the player has neither home runs nor stolen bases.
    pub fn power_speed_number(&self) -> f64 {
        let home_runs = i64::from(self.home_runs);
        let stolen_bases = i64::from(self.stolen_bases);

        if home_runs + stolen_bases == 0 {
            return 0.0;
        }

        round_to(
            ratio(2 * home_runs * stolen_bases, home_runs + stolen_bases),
            2,
        )
    }

    /// Isolated power `SLG - AVG`, three decimal places.
    pub fn isolated_power(&self) -> f64 {
        round_to(self.slugging_pct - self.batting_avg, 3)
    }

    /// Walks per strikeout, three decimal places.
    ///
    /// A player who never struck out gets their walk total back rather than 0.
    pub fn walk_to_strikeout_ratio(&self) -> f64 {
        if self.strikeouts == 0 {
            return f64::from(self.walks);
        }

        round_to(
            ratio(i64::from(self.walks), i64::from(self.strikeouts)),
            3,
        )
    }

    /// Stolen base success rate as a percentage, one decimal place.
    ///
    /// Unknown caught stealing counts as 0. Returns 0 with no attempts.
    pub fn stolen_base_pct(&self) -> f64 {
        let stolen_bases = i64::from(self.stolen_bases);
        let attempts = stolen_bases + i64::from(self.caught_stealing.unwrap_or(0));

        if attempts == 0 {
            return 0.0;
        }

        round_to(ratio(stolen_bases, attempts) * Decimal::ONE_HUNDRED, 1)
    }

    /// Home runs per 100 at-bats, two decimal places. Returns 0 with no at-bats.
    pub fn home_run_rate(&self) -> f64 {
        if self.at_bats == 0 {
            return 0.0;
        }

        round_to(
            ratio(i64::from(self.home_runs), i64::from(self.at_bats)) * Decimal::ONE_HUNDRED,
            2,
        )
    }

    /// Hits per game played, unrounded.
    ///
    /// Returns 0 without hits or without games played.
    pub fn hits_per_game(&self) -> f64 {
        if self.hits <= 0 || self.games == 0 {
            return 0.0;
        }

        f64::from(self.hits) / f64::from(self.games)
    }

    /// Approximate plate appearances, `AB + BB`.
    pub fn plate_appearances(&self) -> i64 {
        i64::from(self.at_bats) + i64::from(self.walks)
    }

    /// Compute every derived metric.
    pub fn derived(&self) -> DerivedStats {
        DerivedStats {
            singles: self.singles(),
            total_bases: self.total_bases(),
            extra_base_hits: self.extra_base_hits(),
            power_speed_number: self.power_speed_number(),
            isolated_power: self.isolated_power(),
            walk_to_strikeout_ratio: self.walk_to_strikeout_ratio(),
            stolen_base_pct: self.stolen_base_pct(),
            home_run_rate: self.home_run_rate(),
            hits_per_game: self.hits_per_game(),
            plate_appearances: self.plate_appearances(),
        }
    }
}

/// Round a decimal to `dp` places with banker's rounding and convert it for serialization.
pub fn round_to(value: Decimal, dp: u32) -> f64 {
    decimal_to_f64(value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven))
}

/// Round a float to `dp` places through its decimal representation.
///
/// Non-finite values round to 0.
pub fn round_f64(value: f64, dp: u32) -> f64 {
    Decimal::from_f64(value).map_or(0.0, |value| round_to(value, dp))
}

/// Convert a decimal for serialization.
pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

// Callers guarantee a non-zero denominator
fn ratio(numerator: i64, denominator: i64) -> Decimal {
    Decimal::from(numerator) / Decimal::from(denominator)
}
