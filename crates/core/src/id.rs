//! Identifiers used across the domain.

/// Identifier of a user or post record.
///
/// Records are addressed by plain 32-bit integers on the wire (`/users/{id}`).
pub type RecordId = i32;

/// Identifier assigned to every record echoed back by a create operation.
///
/// Nothing is allocated: creates are not persisted, so the echoed record
/// always carries this id.
pub const CREATED_RECORD_ID: RecordId = 1;
