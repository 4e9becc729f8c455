//! Crate-wide error types.

use std::io;
use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors surfaced to the caller.
///
/// Metadata gaps are deliberately absent here: a declared column key with no
/// metadata entry, a requested aggregate with no matching label, or a
/// grouping with no fact table all degrade the output shape (fewer columns,
/// fewer aggregate entries, empty child lists) instead of failing. See the
/// `transform` module for the per-component rules.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The reporting engine returned the not-found sentinel for this report.
    #[error("report not found")]
    NotFound,

    /// The response body could not be parsed as a report execution result.
    #[error("malformed report payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The source failed to produce a response body.
    #[error("failed to read report source: {0}")]
    Io(#[from] io::Error),
}

impl ReportError {
    /// Check if this error is the not-found signal rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
