//! In-memory listing source for testing.
//!
//! Holds the bytes behind a `RwLock` so a test can swap the data set between
//! requests and watch the page change, the same way an operator edits the
//! file behind a [`FileSource`](crate::FileSource).

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{ListingSource, StorageError};

/// An in-memory, replaceable listing source.
///
/// Clones share the same underlying buffer.
///
/// # Examples
///
/// ```
/// # use zerostress_storage::{ListingSource, MemorySource};
/// # #[tokio::main]
/// # async fn main() {
/// let source = MemorySource::new(b"[]".to_vec());
/// source.replace(b"[{}]".to_vec()).await;
/// assert_eq!(source.fetch().await.unwrap(), b"[{}]".to_vec());
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    data: Arc<RwLock<Vec<u8>>>,
}

impl MemorySource {
    /// Create a source holding the given bytes.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            data: Arc::new(RwLock::new(bytes)),
        }
    }

    /// Replace the held bytes.
    pub async fn replace(&self, bytes: Vec<u8>) {
        let mut data = self.data.write().await;
        *data = bytes;
    }
}

#[async_trait::async_trait]
impl ListingSource for MemorySource {
    async fn fetch(&self) -> Result<Vec<u8>, StorageError> {
        let data = self.data.read().await;
        Ok(data.clone())
    }

    fn describe(&self) -> String {
        "memory".to_owned()
    }
}
