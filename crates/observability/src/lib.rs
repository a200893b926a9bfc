//! Tracing and logging setup shared by the warehouse binaries.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat) {
    tracing::init(format);
}

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use tracing::LogFormat;
