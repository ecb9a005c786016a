//! File-backed listing source.
//!
//! The file is read in full on every [`fetch`](ListingSource::fetch). Nothing
//! is cached, so an operator can edit the file and the next page render picks
//! up the change.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{ListingSource, StorageError};

/// A source that reads a file from disk on every fetch.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the given path. The file is not opened until the
    /// first fetch.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this source reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl ListingSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, StorageError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            let path = self.path.display().to_string();
            if e.kind() == ErrorKind::NotFound {
                StorageError::NotFound { path }
            } else {
                StorageError::Read {
                    path,
                    reason: e.to_string(),
                }
            }
        })?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "read listing file");
        Ok(bytes)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
