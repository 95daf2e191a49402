use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use sampleapi_core::Entity;

pub mod posts;
pub mod system;
pub mod users;

/// Router for every endpoint the API exposes.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/health/ready", get(system::ready))
        .nest("/users", users::router())
        .nest("/posts", posts::router())
}

/// `201 Created` with the entity as body and its `Location` header.
pub(crate) fn created<E>(entity: E) -> Response
where
    E: Entity + Serialize,
{
    let location = entity.location();
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(entity)).into_response()
}
