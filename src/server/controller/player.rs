//! Player, leaderboard, comparison and aggregate stats endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        player::{PlayerDto, PlayerPageDto},
        stats::{
            ComparisonDto, HallOfFameDto, LeaderboardDto, StatsSummaryDto, UniqueProfilesDto,
        },
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{
            comparison::ComparisonService,
            player::{PlayerListQuery, PlayerService},
            stats::{StatsService, DEFAULT_LEADERBOARD_LIMIT},
        },
    },
};

/// OpenAPI tag shared by every player endpoint
pub static PLAYER_TAG: &str = "players";

/// Query parameters of the paginated player list
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlayerListParams {
    /// Page number starting at 1
    pub page: Option<u64>,
    /// Page size, default 20, capped at 100
    pub limit: Option<u64>,
    /// Exact position code, e.g. `CF`
    pub position: Option<String>,
    /// Case-insensitive substring of the player's name
    pub search: Option<String>,
    /// Sort key such as `name` or `-home_runs`
    pub ordering: Option<String>,
}

impl From<PlayerListParams> for PlayerListQuery {
    fn from(params: PlayerListParams) -> Self {
        Self {
            page: params.page,
            limit: params.limit,
            position: params.position,
            search: params.search,
            ordering: params.ordering,
        }
    }
}

/// Query parameters of the leaderboard
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaderboardParams {
    /// Stat to rank by, defaults to `home_runs`
    pub stat: Option<String>,
    /// Number of leaders, defaults to 10
    pub limit: Option<u64>,
}

/// Query parameters of a player comparison
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CompareParams {
    /// ID of the first player
    pub player1: Option<String>,
    /// ID of the second player
    pub player2: Option<String>,
}

/// Query parameters of the stats summary
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatsSummaryParams {
    /// Position code to summarize, every position when omitted
    pub position: Option<String>,
}

/// List players a page at a time
///
/// # Responses
/// - 200 (OK): Page of players with links to the neighbouring pages
/// - 400 (Bad Request): Unknown position code
/// - 404 (Not Found): Page 0 or past the last page
#[utoipa::path(
    get,
    path = "/players/",
    tag = PLAYER_TAG,
    params(PlayerListParams),
    responses(
        (status = 200, description = "Page of players", body = PlayerPageDto),
        (status = 400, description = "Invalid position filter", body = ErrorDto),
        (status = 404, description = "Invalid page", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_players(
    State(state): State<AppState>,
    Query(params): Query<PlayerListParams>,
) -> Result<impl IntoResponse, Error> {
    let player_service = PlayerService::new(&state.db);

    let page = player_service
        .list_players(&PlayerListQuery::from(params))
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a player with their career stats and derived metrics
#[utoipa::path(
    get,
    path = "/players/{id}/",
    tag = PLAYER_TAG,
    params(("id" = String, Path, description = "Player ID")),
    responses(
        (status = 200, description = "Player details", body = PlayerDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let player_service = PlayerService::new(&state.db);

    let player = player_service.get_player(&id).await?;

    Ok((StatusCode::OK, Json(player)))
}

/// Overwrite some or all of a player's career stats
///
/// Only the fields present in the body are changed. Derived metrics in the response reflect
/// the new values.
///
/// # Responses
/// - 200 (OK): Updated player
/// - 400 (Bad Request): One or more fields failed validation, nothing was written
/// - 404 (Not Found): Unknown player or player without stats
#[utoipa::path(
    post,
    path = "/players/{id}/update_stats/",
    tag = PLAYER_TAG,
    params(("id" = String, Path, description = "Player ID")),
    request_body = Object,
    responses(
        (status = 200, description = "Updated player", body = PlayerDto),
        (status = 400, description = "Invalid stat values", body = ValidationErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, Error> {
    let player_service = PlayerService::new(&state.db);

    let player = player_service.update_stats(&id, &body).await?;

    Ok((StatusCode::OK, Json(player)))
}

/// Top players ranked by a single stat
///
/// An unknown stat ranks by home runs but is echoed back unchanged.
#[utoipa::path(
    get,
    path = "/players/leaderboard/",
    tag = PLAYER_TAG,
    params(LeaderboardParams),
    responses(
        (status = 200, description = "Stat leaders", body = LeaderboardDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> Result<impl IntoResponse, Error> {
    let stats_service = StatsService::new(&state.db);

    let stat = params.stat.as_deref().unwrap_or("home_runs");
    let limit = params.limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT);

    let leaderboard = stats_service.leaderboard(stat, limit).await?;

    Ok((StatusCode::OK, Json(leaderboard)))
}

/// Compare two players metric by metric
#[utoipa::path(
    get,
    path = "/players/compare/",
    tag = PLAYER_TAG,
    params(CompareParams),
    responses(
        (status = 200, description = "Metric comparison", body = ComparisonDto),
        (status = 400, description = "Missing player IDs", body = ErrorDto),
        (status = 404, description = "One or both players not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn compare(
    State(state): State<AppState>,
    Query(params): Query<CompareParams>,
) -> Result<impl IntoResponse, Error> {
    let comparison_service = ComparisonService::new(&state.db);

    let comparison = comparison_service
        .compare(params.player1.as_deref(), params.player2.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(comparison)))
}

/// Aggregate career stats, optionally for a single position
#[utoipa::path(
    get,
    path = "/players/stats_summary/",
    tag = PLAYER_TAG,
    params(StatsSummaryParams),
    responses(
        (status = 200, description = "Aggregate summary", body = StatsSummaryDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn stats_summary(
    State(state): State<AppState>,
    Query(params): Query<StatsSummaryParams>,
) -> Result<impl IntoResponse, Error> {
    let stats_service = StatsService::new(&state.db);

    let summary = stats_service
        .stats_summary(params.position.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(summary)))
}

/// Derived metrics and classifications for the first twenty players by name
///
/// Players among them without career stats are left out.
#[utoipa::path(
    get,
    path = "/players/unique_stats/",
    tag = PLAYER_TAG,
    responses(
        (status = 200, description = "Statistical profiles", body = UniqueProfilesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unique_stats(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let stats_service = StatsService::new(&state.db);

    let profiles = stats_service.unique_profiles().await?;

    Ok((StatusCode::OK, Json(profiles)))
}

/// Players meeting the home run, hit and OPS hall of fame thresholds
#[utoipa::path(
    get,
    path = "/players/hall_of_fame_candidates/",
    tag = PLAYER_TAG,
    responses(
        (status = 200, description = "Hall of fame candidates", body = HallOfFameDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn hall_of_fame_candidates(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let stats_service = StatsService::new(&state.db);

    let candidates = stats_service.hall_of_fame_candidates().await?;

    Ok((StatusCode::OK, Json(candidates)))
}
