//! Storage error types.
//!
//! Every error variant carries the location that failed so a log line is
//! enough to diagnose the problem.

/// Errors that can occur while fetching listing data.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing file does not exist.
    #[error("listing data not found at '{path}'")]
    NotFound { path: String },

    /// The backing data exists but could not be read.
    #[error("failed to read listing data at '{path}': {reason}")]
    Read { path: String, reason: String },
}
