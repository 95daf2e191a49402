//! Tracing and logging (shared setup).

/// Initialize process-wide observability (structured JSON logs).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize human-readable logging for tests and local debugging.
pub fn init_for_tests() {
    tracing::init_pretty();
}

/// Tracing configuration (filters, formatters).
pub mod tracing;
