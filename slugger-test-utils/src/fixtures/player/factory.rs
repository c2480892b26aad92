//! Factory functions for generating career stat lines.
//!
//! These are in-memory model instances that don't touch the database. Pass them to the
//! builder or to [`PlayerFixtures`](super::PlayerFixtures) to persist them; the `id` and
//! `player_id` fields are placeholders and get replaced on insert.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::model::CareerStatsModel;

/// Build a stat line from raw counting stats and rates given in thousandths.
///
/// Rates are passed as integers, e.g. `342` for a .342 batting average.
#[allow(clippy::too_many_arguments)]
pub fn stats_model(
    games: i32,
    at_bats: i32,
    runs: i32,
    hits: i32,
    doubles: i32,
    triples: i32,
    home_runs: i32,
    rbis: i32,
    walks: i32,
    strikeouts: i32,
    stolen_bases: i32,
    caught_stealing: Option<i32>,
    rates: [i64; 4],
) -> CareerStatsModel {
    let now = Utc::now().naive_utc();
    let [batting_avg, on_base_pct, slugging_pct, ops] = rates;

    CareerStatsModel {
        id: 0,
        player_id: 0,
        games,
        at_bats,
        runs,
        hits,
        doubles,
        triples,
        home_runs,
        rbis,
        walks,
        strikeouts,
        stolen_bases,
        caught_stealing,
        batting_avg: Decimal::new(batting_avg, 3),
        on_base_pct: Decimal::new(on_base_pct, 3),
        slugging_pct: Decimal::new(slugging_pct, 3),
        ops: Decimal::new(ops, 3),
        created_at: now,
        updated_at: now,
    }
}

/// A solid everyday player: 10 HR, 10 SB, .300/.350/.450 over 100 games.
pub fn mock_stats_model() -> CareerStatsModel {
    stats_model(
        100,
        400,
        50,
        120,
        20,
        5,
        10,
        50,
        40,
        80,
        10,
        Some(2),
        [300, 350, 450, 800],
    )
}

/// A stat line with every counting stat and rate at zero and no caught stealing data.
pub fn empty_stats_model() -> CareerStatsModel {
    stats_model(0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, None, [0, 0, 0, 0])
}

pub fn babe_ruth_stats() -> CareerStatsModel {
    stats_model(
        2503,
        8399,
        2174,
        2873,
        506,
        136,
        714,
        2214,
        2062,
        1330,
        123,
        Some(117),
        [342, 474, 690, 1164],
    )
}

pub fn hank_aaron_stats() -> CareerStatsModel {
    stats_model(
        3298,
        12364,
        2174,
        3771,
        624,
        98,
        755,
        2297,
        1402,
        1383,
        240,
        Some(73),
        [305, 374, 555, 929],
    )
}

pub fn willie_mays_stats() -> CareerStatsModel {
    stats_model(
        2992,
        10881,
        2062,
        3283,
        523,
        140,
        660,
        1903,
        1464,
        1526,
        338,
        Some(103),
        [302, 384, 557, 941],
    )
}
