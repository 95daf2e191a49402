//! Users domain module.
//!
//! Pure domain types for the `/users` resource: the entity echoed on the wire
//! and the request body accepted by create/update, with its field rules.
//! No IO, no HTTP, no storage.

pub mod user;

pub use user::{User, UserRequest};
