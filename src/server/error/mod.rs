//! Error types for the Slugger server application.
//!
//! Domain specific errors live in their own modules and are aggregated into [`Error`]. Every
//! error implements `IntoResponse` so handlers can return them directly with `?`.

pub mod config;
pub mod player;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, player::PlayerError},
};

/// Main error type for the Slugger server application.
///
/// Aggregates domain errors and external library errors so the `?` operator converts them
/// automatically. The `IntoResponse` implementation maps client errors to 400 or 404 and
/// everything else to a logged 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Player lookup, comparison, pagination or stat validation error.
    #[error(transparent)]
    PlayerError(#[from] PlayerError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Failed to encode pagination link query parameters.
    #[error(transparent)]
    UrlEncodeError(#[from] serde_urlencoded::ser::Error),
    /// Failed to bind or serve the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Missing comparison parameters, invalid filters or stat values
/// - 404 Not Found - Unknown players or pages
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::PlayerError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
