use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when submitted stat values fail validation
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ValidationErrorDto {
    /// The error message
    pub error: String,
    /// Reason each rejected field failed validation, keyed by field name
    pub fields: BTreeMap<String, String>,
}

/// Liveness probe payload
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub message: String,
}
