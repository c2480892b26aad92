//! Conversions from database models into API views.
//!
//! Derived metrics are computed here on read through [`StatLine`] and never stored.

use crate::{
    model::{
        player::{CareerStatsDto, PlayerDto, PlayerListItemDto},
        stats::{ProfileMetricsDto, StatProfileDto},
    },
    server::{
        model::db::{CareerStatsModel, PlayerModel},
        stats::{
            classification::Classification,
            formula::{decimal_to_f64, round_f64},
            StatLine,
        },
    },
};

/// Full player view with nested stats and every derived metric
pub fn player_dto(player: PlayerModel, stats: Option<CareerStatsModel>) -> PlayerDto {
    PlayerDto {
        id: player.id,
        position: player.position.code().to_string(),
        position_display: player.position.display_name().to_string(),
        name: player.name,
        description: player.description,
        career_stats: stats.map(career_stats_dto),
        created_at: player.created_at,
        updated_at: player.updated_at,
    }
}

/// Raw career totals alongside the metrics derived from them
pub fn career_stats_dto(stats: CareerStatsModel) -> CareerStatsDto {
    let line = StatLine::from(&stats);
    let derived = line.derived();

    CareerStatsDto {
        id: stats.id,
        games: stats.games,
        at_bats: stats.at_bats,
        runs: stats.runs,
        hits: stats.hits,
        doubles: stats.doubles,
        triples: stats.triples,
        home_runs: stats.home_runs,
        rbis: stats.rbis,
        walks: stats.walks,
        strikeouts: stats.strikeouts,
        stolen_bases: stats.stolen_bases,
        caught_stealing: stats.caught_stealing,
        batting_avg: decimal_to_f64(line.batting_avg),
        on_base_pct: decimal_to_f64(line.on_base_pct),
        slugging_pct: decimal_to_f64(line.slugging_pct),
        ops: decimal_to_f64(line.ops),
        singles: derived.singles,
        total_bases: derived.total_bases,
        extra_base_hits: derived.extra_base_hits,
        power_speed_number: derived.power_speed_number,
        isolated_power: derived.isolated_power,
        walk_to_strikeout_ratio: derived.walk_to_strikeout_ratio,
        stolen_base_pct: derived.stolen_base_pct,
        home_run_rate: derived.home_run_rate,
        plate_appearances: derived.plate_appearances,
        hits_per_game: derived.hits_per_game,
        created_at: stats.created_at,
        updated_at: stats.updated_at,
    }
}

/// Lightweight view used by lists, leaderboards and hall of fame clubs
///
/// Stat fields are `None` for a player without a stats record.
pub fn list_item_dto(player: &PlayerModel, stats: Option<&CareerStatsModel>) -> PlayerListItemDto {
    let line = stats.map(StatLine::from);

    PlayerListItemDto {
        id: player.id,
        name: player.name.clone(),
        position: player.position.code().to_string(),
        position_display: player.position.display_name().to_string(),
        home_runs: line.as_ref().map(|line| line.home_runs),
        batting_avg: line.as_ref().map(|line| decimal_to_f64(line.batting_avg)),
        ops: line.as_ref().map(|line| decimal_to_f64(line.ops)),
        hits_per_game: line
            .as_ref()
            .map(|line| round_f64(line.hits_per_game(), 3)),
    }
}

/// Derived metrics and classification tags of a player
pub fn stat_profile_dto(player: &PlayerModel, stats: &CareerStatsModel) -> StatProfileDto {
    let line = StatLine::from(stats);
    let derived = line.derived();

    let classifications = Classification::classify(&line, &derived)
        .iter()
        .map(|tag| tag.label().to_string())
        .collect();

    StatProfileDto {
        name: player.name.clone(),
        position: player.position.display_name().to_string(),
        metrics: ProfileMetricsDto {
            power_speed_number: derived.power_speed_number,
            isolated_power: derived.isolated_power,
            bb_k_ratio: derived.walk_to_strikeout_ratio,
            stolen_base_success: derived.stolen_base_pct,
            home_run_rate: derived.home_run_rate,
            total_bases: derived.total_bases,
            extra_base_hits: derived.extra_base_hits,
        },
        classifications,
    }
}
