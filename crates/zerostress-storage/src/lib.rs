//! Listing source abstraction for the Zero-Stress bundle site.
//!
//! This crate defines the [`ListingSource`] trait, a read-only byte source
//! that knows nothing about vehicles, JSON, or the campaign page. The catalog
//! in `zerostress-core` fetches raw bytes through a source and parses them
//! into listings on every render.
//!
//! Three implementations are provided:
//!
//! - [`EmbeddedSource`]: production default, bytes compiled into the binary
//! - [`FileSource`]: re-reads a file on every fetch so edits show up live
//! - [`MemorySource`]: in-memory and replaceable, for testing

mod embedded;
mod error;
mod file;
mod memory;

pub use embedded::EmbeddedSource;
pub use error::StorageError;
pub use file::FileSource;
pub use memory::MemorySource;

/// A read-only source of listing data.
///
/// Sources are never written to by the site. Implementations must be safe to
/// share across async tasks (`Send + Sync`).
#[async_trait::async_trait]
pub trait ListingSource: Send + Sync + 'static {
    /// Fetch the current raw bytes of the listing collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if the backing data is missing, or
    /// [`StorageError::Read`] if it exists but cannot be read.
    async fn fetch(&self) -> Result<Vec<u8>, StorageError>;

    /// Short human-readable description for log lines (e.g. `file:./vins.json`).
    fn describe(&self) -> String;
}
