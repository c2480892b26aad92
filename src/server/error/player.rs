//! Player lookup, listing, comparison and stat update errors.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, ValidationErrorDto};

/// Client-facing failures of player lookups, listings, comparisons and stat updates.
#[derive(Error, Debug)]
pub enum PlayerError {
    /// No player with the requested ID, including IDs that aren't integers
    #[error("Player with ID {0:?} not found")]
    PlayerNotFound(String),
    /// The player exists but has no career stats record
    #[error("Career stats for player ID {0:?} not found")]
    StatsNotFound(i32),
    /// Either compared player is unknown or has no stats
    #[error("Comparison player IDs {0:?} and {1:?} could not both be resolved")]
    ComparisonPlayersNotFound(String, String),
    /// A comparison was requested without both IDs
    #[error("Comparison requires both player1 and player2 query parameters")]
    MissingComparisonParams,
    /// Page 0, or a page past the end of the list
    #[error("Requested page {0} is past the last page of results")]
    InvalidPage(u64),
    /// The list was filtered by an unknown position code
    #[error("Unknown position filter {0:?}")]
    InvalidPosition(String),
    /// One or more stat fields failed validation, keyed by field name
    #[error("Stat update rejected for fields: {0:?}")]
    InvalidStats(BTreeMap<String, String>),
}

impl PlayerError {
    fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
        (
            status,
            Json(ErrorDto {
                error: message.into(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for PlayerError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::PlayerNotFound(_) | Self::StatsNotFound(_) => {
                Self::error_response(StatusCode::NOT_FOUND, "Player not found")
            }
            Self::ComparisonPlayersNotFound(_, _) => {
                Self::error_response(StatusCode::NOT_FOUND, "One or both players not found")
            }
            Self::MissingComparisonParams => Self::error_response(
                StatusCode::BAD_REQUEST,
                "Both player1 and player2 IDs are required",
            ),
            Self::InvalidPage(_) => Self::error_response(StatusCode::NOT_FOUND, "Invalid page."),
            Self::InvalidPosition(position) => Self::error_response(
                StatusCode::BAD_REQUEST,
                format!("Select a valid choice. {} is not one of the available choices.", position),
            ),
            Self::InvalidStats(fields) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorDto {
                    error: "Invalid stat values".to_string(),
                    fields,
                }),
            )
                .into_response(),
        }
    }
}
