//! Two-outcome lookup result.

use crate::error::{DomainError, DomainResult};
use crate::id::RecordId;

/// Result of looking a record up by identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    Missing,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Missing => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::Missing => Lookup::Missing,
        }
    }

    /// Convert into a domain result, naming the resource on a miss.
    pub fn ok_or_not_found(self, resource: &'static str, id: RecordId) -> DomainResult<T> {
        self.found().ok_or_else(|| DomainError::not_found(resource, id))
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::Missing,
        }
    }
}
