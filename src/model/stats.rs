use serde::{Deserialize, Serialize};

use crate::model::player::{PlayerDto, PlayerListItemDto};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LeaderboardDto {
    /// The stat key exactly as requested, even when it fell back to home runs
    pub stat: String,
    pub limit: u64,
    pub leaders: Vec<PlayerListItemDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ComparisonDto {
    pub player1: PlayerDto,
    pub player2: PlayerDto,
    pub comparison: MetricComparisonsDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MetricComparisonsDto {
    pub home_runs: CountComparisonDto,
    pub batting_avg: RateComparisonDto,
    pub ops: RateComparisonDto,
    pub stolen_bases: CountComparisonDto,
    pub power_speed_number: RateComparisonDto,
    /// Walk to strikeout ratio, keyed `walks_vs_strikeouts` on the wire
    #[serde(rename = "walks_vs_strikeouts")]
    pub walk_to_strikeout_ratio: RateComparisonDto,
}

/// Side-by-side counting stat with `difference = player1 - player2`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CountComparisonDto {
    pub player1: i32,
    pub player2: i32,
    pub difference: i32,
}

/// Side-by-side rate or ratio with `difference = player1 - player2`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RateComparisonDto {
    pub player1: f64,
    pub player2: f64,
    pub difference: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatsSummaryDto {
    /// Position code the summary was filtered to, or `all`
    pub position: String,
    pub summary: SummaryDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SummaryDto {
    pub total_players: u64,
    pub home_runs: HomeRunSummaryDto,
    pub batting_average: RateSummaryDto,
    pub ops: RateSummaryDto,
    pub stolen_bases: StolenBaseSummaryDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HomeRunSummaryDto {
    pub average: f64,
    pub max: i32,
    pub min: i32,
    pub leader: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RateSummaryDto {
    pub average: f64,
    pub max: f64,
    pub leader: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StolenBaseSummaryDto {
    pub average: f64,
    pub max: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UniqueProfilesDto {
    pub unique_statistical_profiles: Vec<StatProfileDto>,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatProfileDto {
    pub name: String,
    /// Position name, e.g. `Right Field`
    pub position: String,
    pub metrics: ProfileMetricsDto,
    pub classifications: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProfileMetricsDto {
    pub power_speed_number: f64,
    pub isolated_power: f64,
    pub bb_k_ratio: f64,
    pub stolen_base_success: f64,
    pub home_run_rate: f64,
    pub total_bases: i64,
    pub extra_base_hits: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HallOfFameDto {
    /// 500 or more career home runs
    #[serde(rename = "500_home_run_club")]
    pub home_run_club: ClubDto,
    /// 3000 or more hits with a .300 or better average
    #[serde(rename = "3000_hit_300_avg_club")]
    pub hit_club: ClubDto,
    /// .900 or better OPS with 400 or more home runs
    #[serde(rename = "elite_ops_power_club")]
    pub ops_club: ClubDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClubDto {
    pub count: u64,
    pub players: Vec<PlayerListItemDto>,
}
