//! HTTP API application wiring (Axum router + directory wiring).
//!
//! Layout:
//! - `directory.rs`: record lookups behind the routes (canned sample data)
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `extract.rs`: path id and validated JSON body extractors
//! - `dto.rs`: response-only DTOs (health, error bodies)
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::middleware::{MakeRequestUuidV7, REQUEST_ID_HEADER, RequestSpan};

pub mod directory;
pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;

pub use directory::{Directory, NOT_FOUND_SENTINEL, SampleDirectory, SharedDirectory};

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(directory: SharedDirectory) -> Router {
    routes::router()
        .fallback(routes::system::route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuidV7))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(RequestSpan)
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
                .layer(Extension(directory)),
        )
}

/// Router backed by the canned sample directory.
pub fn build_sample_app() -> Router {
    build_app(Arc::new(SampleDirectory))
}
