//! `sampleapi-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no HTTP, no storage):
//! identifiers, the entity trait, the two-outcome lookup result, the error
//! model and the declarative validation rules used by request bodies.

pub mod entity;
pub mod error;
pub mod id;
pub mod lookup;
pub mod validation;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CREATED_RECORD_ID, RecordId};
pub use lookup::Lookup;
pub use validation::{Rule, RuleSet, Validate, ValidationErrors, Violation, ViolationKind};
