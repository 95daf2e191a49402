//! Request extractors: integer path ids and validated JSON bodies.

use axum::extract::{FromRequest, FromRequestParts, OriginalUri, Path, Request};
use axum::http::request::Parts;
use axum::{async_trait, Json};
use serde::de::DeserializeOwned;

use sampleapi_core::{RecordId, Validate};

use crate::app::errors::ApiError;

/// Integer id captured from the route (`/users/:id`).
///
/// A segment that is not an integer does not address any record, so it is
/// rejected as an unmatched route (404) rather than a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordIdPath(pub RecordId);

#[async_trait]
impl<S> FromRequestParts<S> for RecordIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<RecordId>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(_) => {
                // Inside a nested router `parts.uri` has the prefix stripped.
                let path = match parts.extensions.get::<OriginalUri>() {
                    Some(OriginalUri(uri)) => uri.path(),
                    None => parts.uri.path(),
                };
                Err(ApiError::RouteNotFound(path.to_string()))
            }
        }
    }
}

/// JSON body that has been decoded and has passed its field rules.
///
/// Decoding failures become `MalformedRequest`; rule failures become
/// `Validation`. Both are raised before the handler runs, so they always take
/// precedence over the handler's not-found check.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::MalformedRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}
