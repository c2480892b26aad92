use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Full player view with nested career stats and every derived metric
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlayerDto {
    pub id: i32,
    pub name: String,
    /// Position code, e.g. `CF`
    pub position: String,
    /// Position name, e.g. `Center Field`
    pub position_display: String,
    pub description: Option<String>,
    /// `None` when no career stats have been recorded for the player yet
    pub career_stats: Option<CareerStatsDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Raw career totals and rates alongside the metrics derived from them
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CareerStatsDto {
    pub id: i32,
    pub games: i32,
    pub at_bats: i32,
    pub runs: i32,
    pub hits: i32,
    pub doubles: i32,
    pub triples: i32,
    pub home_runs: i32,
    pub rbis: i32,
    pub walks: i32,
    pub strikeouts: i32,
    pub stolen_bases: i32,
    /// `None` when caught stealing was not tracked for the player
    pub caught_stealing: Option<i32>,
    pub batting_avg: f64,
    pub on_base_pct: f64,
    pub slugging_pct: f64,
    pub ops: f64,
    pub singles: i64,
    pub total_bases: i64,
    pub extra_base_hits: i64,
    pub power_speed_number: f64,
    pub isolated_power: f64,
    pub walk_to_strikeout_ratio: f64,
    pub stolen_base_pct: f64,
    pub home_run_rate: f64,
    pub plate_appearances: i64,
    pub hits_per_game: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Lightweight player view used by lists, leaderboards and hall of fame clubs
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlayerListItemDto {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub position_display: String,
    pub home_runs: Option<i32>,
    pub batting_avg: Option<f64>,
    pub ops: Option<f64>,
    pub hits_per_game: Option<f64>,
}

/// A single page of the player list
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlayerPageDto {
    /// Total number of players matching the filters across all pages
    pub count: u64,
    /// Link to the next page, `None` on the last page
    pub next: Option<String>,
    /// Link to the previous page, `None` on the first page
    pub previous: Option<String>,
    pub results: Vec<PlayerListItemDto>,
}
