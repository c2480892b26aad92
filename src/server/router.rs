//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here with its OpenAPI specification, and Swagger UI is served
//! at `/api/docs` for interactive exploration.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /players/` - Paginated, filterable player list
/// - `GET /players/{id}/` - Player details with derived metrics
/// - `POST /players/{id}/update_stats/` - Partial career stats update
/// - `GET /players/leaderboard/` - Top players by a single stat
/// - `GET /players/compare/` - Side-by-side comparison of two players
/// - `GET /players/stats_summary/` - Aggregate summary, optionally per position
/// - `GET /players/unique_stats/` - Derived metrics and classifications
/// - `GET /players/hall_of_fame_candidates/` - Players meeting hall of fame thresholds
/// - `GET /health/` - Liveness probe
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`. Requests are traced
/// through `tower-http`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Slugger", description = "Baseball career statistics API"), tags(
        (name = controller::player::PLAYER_TAG, description = "Players, leaderboards and career stat analysis"),
        (name = controller::health::HEALTH_TAG, description = "Service health"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::player::list_players))
        .routes(routes!(controller::player::get_player))
        .routes(routes!(controller::player::update_stats))
        .routes(routes!(controller::player::leaderboard))
        .routes(routes!(controller::player::compare))
        .routes(routes!(controller::player::stats_summary))
        .routes(routes!(controller::player::unique_stats))
        .routes(routes!(controller::player::hall_of_fame_candidates))
        .routes(routes!(controller::health::health))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
