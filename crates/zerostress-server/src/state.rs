//! Shared application state for the Zero-Stress server.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`. It holds only read-only things: the listing
//! source and the dealer contact numbers. Per-visitor UI state travels in
//! the request URL, never here.

use std::sync::Arc;

use zerostress_core::contact::DealerContact;
use zerostress_storage::ListingSource;

/// Shared application state passed to all HTTP handlers.
pub struct AppState {
    /// Where the campaign page reads listings from on each render.
    pub listings: Arc<dyn ListingSource>,
    /// Phone and SMS numbers behind the call/text links.
    pub contact: DealerContact,
}

impl AppState {
    /// Bundle a listing source and contact numbers.
    #[must_use]
    pub fn new(listings: Arc<dyn ListingSource>, contact: DealerContact) -> Self {
        Self { listings, contact }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("listings", &self.listings.describe())
            .field("contact", &self.contact)
            .finish()
    }
}
