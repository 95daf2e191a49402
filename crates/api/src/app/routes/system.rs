use axum::{extract::OriginalUri, Json};

use crate::app::dto::HealthStatus;
use crate::app::errors::ApiError;

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

pub async fn ready() -> Json<HealthStatus> {
    Json(HealthStatus::ready())
}

/// Fallback for paths no route matches.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}
