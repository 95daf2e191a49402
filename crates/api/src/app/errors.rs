use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use sampleapi_core::{DomainError, RecordId, ValidationErrors, Violation};

use crate::app::dto::ErrorBody;

/// Errors surfaced at the request boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body decoded but violated field rules.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Addressed record does not exist.
    #[error("{resource} {id} not found")]
    NotFound {
        resource: &'static str,
        id: RecordId,
    },

    /// No route matches the request path.
    #[error("no route for {0}")]
    RouteNotFound(String),

    /// Body could not be decoded as the expected JSON shape.
    #[error("malformed request body: {0}")]
    MalformedRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } | ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::NotFound { .. } | ApiError::RouteNotFound(_) => "not_found",
            ApiError::MalformedRequest(_) => "malformed_request",
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => ApiError::Validation(errors),
            DomainError::NotFound { resource, id } => ApiError::NotFound { resource, id },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = %self, "request rejected");

        let violations = match &self {
            ApiError::Validation(errors) => errors.violations().to_vec(),
            _ => Vec::new(),
        };
        json_error(status, self.code(), self.to_string(), violations)
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
    errors: Vec<Violation>,
) -> Response {
    (
        status,
        Json(ErrorBody {
            error: code,
            message: message.into(),
            errors,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sampleapi_core::Validate;
    use sampleapi_users::UserRequest;

    #[test]
    fn statuses_follow_error_kind() {
        let validation = UserRequest::new("", "x@y").validate().unwrap_err();
        assert_eq!(ApiError::from(validation).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MalformedRequest("eof".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(DomainError::not_found("user", 999)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::RouteNotFound("/nope".into()).code(),
            "not_found"
        );
    }

    #[test]
    fn domain_not_found_keeps_resource() {
        let err = ApiError::from(DomainError::not_found("post", 999));
        assert_eq!(err.to_string(), "post 999 not found");
    }
}
