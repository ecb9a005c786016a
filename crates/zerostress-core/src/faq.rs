//! FAQ disclosure state.
//!
//! Each FAQ entry expands and collapses on its own. There is no exclusivity:
//! any subset of entries may be open at once. The set travels in the page
//! URL as a comma-separated list of indices (`faq=0,3`).

use std::collections::BTreeSet;

/// The set of open FAQ entries, by index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqDisclosure {
    open: BTreeSet<usize>,
}

impl FaqDisclosure {
    /// All entries collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `faq` query value. Tokens that are not indices are skipped.
    #[must_use]
    pub fn parse(param: &str) -> Self {
        let open = param
            .split(',')
            .filter_map(|token| token.trim().parse::<usize>().ok())
            .collect();
        Self { open }
    }

    /// Flip one entry, leaving every other entry as it was.
    #[must_use]
    pub fn toggle(&self, index: usize) -> Self {
        let mut open = self.open.clone();
        if !open.remove(&index) {
            open.insert(index);
        }
        Self { open }
    }

    /// Whether the entry at `index` is expanded.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    /// Whether every entry is collapsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Serialize back to the `faq` query value, indices ascending.
    #[must_use]
    pub fn to_param(&self) -> String {
        self.open
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}
