//! Listing data compiled into the binary.

use crate::{ListingSource, StorageError};

/// A source backed by a `'static` byte slice, usually from `include_bytes!`.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedSource {
    name: &'static str,
    bytes: &'static [u8],
}

impl EmbeddedSource {
    /// Wrap a static byte slice. `name` only appears in log lines.
    #[must_use]
    pub const fn new(name: &'static str, bytes: &'static [u8]) -> Self {
        Self { name, bytes }
    }
}

#[async_trait::async_trait]
impl ListingSource for EmbeddedSource {
    async fn fetch(&self) -> Result<Vec<u8>, StorageError> {
        Ok(self.bytes.to_vec())
    }

    fn describe(&self) -> String {
        format!("embedded:{}", self.name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_returns_embedded_bytes() {
        let source = EmbeddedSource::new("fixture", b"[]");
        assert_eq!(source.fetch().await.unwrap(), b"[]".to_vec());
    }

    #[test]
    fn describe_includes_name() {
        let source = EmbeddedSource::new("eligible-vins.json", b"");
        assert_eq!(source.describe(), "embedded:eligible-vins.json");
    }
}
