//! Record directory: where handlers look users and posts up.
//!
//! There is no store behind the API. `SampleDirectory` answers every lookup
//! with canned records and reports the sentinel id as missing.

use std::sync::Arc;

use sampleapi_core::{Lookup, RecordId};
use sampleapi_posts::Post;
use sampleapi_users::User;

/// Identifier that every lookup treats as an absent record.
///
/// Kept verbatim for compatibility with existing clients.
pub const NOT_FOUND_SENTINEL: RecordId = 999;

/// Read access to users and posts.
pub trait Directory: Send + Sync {
    fn users(&self) -> Vec<User>;

    fn user(&self, id: RecordId) -> Lookup<User>;

    fn posts(&self) -> Vec<Post>;

    fn post(&self, id: RecordId) -> Lookup<Post>;

    /// Posts authored by `user_id`; `Missing` when the user does not exist.
    fn user_posts(&self, user_id: RecordId) -> Lookup<Vec<Post>>;
}

pub type SharedDirectory = Arc<dyn Directory>;

/// Canned sample data keyed only by the sentinel id.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleDirectory;

impl SampleDirectory {
    fn lookup<T>(id: RecordId, make: impl FnOnce() -> T) -> Lookup<T> {
        if id == NOT_FOUND_SENTINEL {
            Lookup::Missing
        } else {
            Lookup::Found(make())
        }
    }
}

impl Directory for SampleDirectory {
    fn users(&self) -> Vec<User> {
        vec![
            User::new(1, "Alice", "alice@example.com"),
            User::new(2, "Bob", "bob@example.com"),
        ]
    }

    fn user(&self, id: RecordId) -> Lookup<User> {
        Self::lookup(id, || User::new(id, "Sample User", "user@example.com"))
    }

    fn posts(&self) -> Vec<Post> {
        vec![
            Post::new(1, 1, "First Post", "Hello world"),
            Post::new(2, 1, "Second Post", "Another post"),
        ]
    }

    fn post(&self, id: RecordId) -> Lookup<Post> {
        Self::lookup(id, || Post::new(id, 1, "Sample Post", "Post body"))
    }

    fn user_posts(&self, user_id: RecordId) -> Lookup<Vec<Post>> {
        Self::lookup(user_id, || vec![Post::new(1, user_id, "User Post", "Content")])
    }
}
