//! Entity trait: identity + addressable location.

use crate::id::RecordId;

/// Entity marker + minimal interface.
///
/// Every entity is exposed under a REST collection (`/users`, `/posts`), so
/// its canonical location can be derived from the collection and the id.
pub trait Entity {
    /// Singular resource name, used in error messages (`"user"`).
    const RESOURCE: &'static str;

    /// Collection path segment (`"users"`).
    const COLLECTION: &'static str;

    /// Returns the entity identifier.
    fn id(&self) -> RecordId;

    /// Canonical location of this entity, e.g. `/users/1`.
    fn location(&self) -> String {
        format!("/{}/{}", Self::COLLECTION, self.id())
    }
}
