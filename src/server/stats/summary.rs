//! Aggregate summary over a set of career stat lines.
//!
//! Rows are folded in the order they are given, which callers keep in store order so the first
//! record holding a maximum is reported as its leader.

use rust_decimal::Decimal;

use crate::{
    model::stats::{HomeRunSummaryDto, RateSummaryDto, StolenBaseSummaryDto, SummaryDto},
    server::{
        model::db::{CareerStatsModel, PlayerModel},
        stats::formula::{decimal_to_f64, round_to},
    },
};

/// Running maximum remembering the first row that reached it.
struct Leader<'a, T> {
    value: T,
    name: Option<&'a str>,
}

impl<'a, T: PartialOrd + Copy> Leader<'a, T> {
    fn new(value: T) -> Self {
        Self { value, name: None }
    }

    fn observe(&mut self, value: T, name: &'a str) {
        if self.name.is_none() || value > self.value {
            self.value = value;
            self.name = Some(name);
        }
    }
}

/// Summarize the given rows.
///
/// An empty input yields zeroed averages and extremes with no leaders.
pub fn summarize<'a, I>(rows: I) -> SummaryDto
where
    I: IntoIterator<Item = (&'a PlayerModel, &'a CareerStatsModel)>,
{
    let mut count: u64 = 0;
    let mut home_run_total: i64 = 0;
    let mut stolen_base_total: i64 = 0;
    let mut batting_avg_total = Decimal::ZERO;
    let mut ops_total = Decimal::ZERO;

    let mut home_runs = Leader::new(0);
    let mut min_home_runs: Option<i32> = None;
    let mut batting_avg = Leader::new(Decimal::ZERO);
    let mut ops = Leader::new(Decimal::ZERO);
    let mut max_stolen_bases = 0;

    for (player, stats) in rows {
        let row_batting_avg = stats.batting_avg.round_dp(3);
        let row_ops = stats.ops.round_dp(3);

        count += 1;
        home_run_total += i64::from(stats.home_runs);
        stolen_base_total += i64::from(stats.stolen_bases);
        batting_avg_total += row_batting_avg;
        ops_total += row_ops;

        home_runs.observe(stats.home_runs, &player.name);
        batting_avg.observe(row_batting_avg, &player.name);
        ops.observe(row_ops, &player.name);

        min_home_runs = Some(min_home_runs.map_or(stats.home_runs, |min| min.min(stats.home_runs)));
        max_stolen_bases = max_stolen_bases.max(stats.stolen_bases);
    }

    let mean = |total: Decimal, dp: u32| {
        if count == 0 {
            0.0
        } else {
            round_to(total / Decimal::from(count), dp)
        }
    };

    SummaryDto {
        total_players: count,
        home_runs: HomeRunSummaryDto {
            average: mean(Decimal::from(home_run_total), 2),
            max: home_runs.value,
            min: min_home_runs.unwrap_or(0),
            leader: home_runs.name.map(str::to_string),
        },
        batting_average: RateSummaryDto {
            average: mean(batting_avg_total, 3),
            max: decimal_to_f64(batting_avg.value),
            leader: batting_avg.name.map(str::to_string),
        },
        ops: RateSummaryDto {
            average: mean(ops_total, 3),
            max: decimal_to_f64(ops.value),
            leader: ops.name.map(str::to_string),
        },
        stolen_bases: StolenBaseSummaryDto {
            average: mean(Decimal::from(stolen_base_total), 2),
            max: max_stolen_bases,
        },
    }
}
