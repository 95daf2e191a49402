//! Domain error model.

use thiserror::Error;

use crate::id::RecordId;
use crate::validation::ValidationErrors;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures (validation, absent records).
/// Transport concerns such as undecodable bodies belong to the HTTP layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A request body violated one or more field rules.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// A requested record does not exist.
    #[error("{resource} {id} not found")]
    NotFound {
        resource: &'static str,
        id: RecordId,
    },
}

impl DomainError {
    pub fn not_found(resource: &'static str, id: RecordId) -> Self {
        Self::NotFound { resource, id }
    }
}
