//! Error types for `zerostress-core`.

use zerostress_storage::StorageError;

/// Errors from loading the listing catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The listing source could not be read.
    #[error("catalog source error: {0}")]
    Source(#[from] StorageError),

    /// The bytes were not a JSON array of well-formed listing records.
    #[error("malformed listing data: {reason}")]
    Malformed { reason: String },

    /// Two records share the same identifier.
    #[error("duplicate listing id '{id}'")]
    DuplicateId { id: String },
}
