//! Posts domain module.
//!
//! Pure domain types for the `/posts` resource (and the per-user post
//! listing): the entity echoed on the wire and the create body with its rules.

pub mod post;

pub use post::{Post, PostRequest};
