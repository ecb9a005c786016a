//! Liveness probe.
//!
//! Loads the catalog the same way the campaign page does, so a broken
//! listing source shows up here before a visitor hits it.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::warn;

use zerostress_core::inventory::available_listings;
use zerostress_core::listing::Catalog;

use crate::state::AppState;

/// Build the health router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: &'static str,
    /// Listings in the catalog, available or not.
    pub listings_total: usize,
    /// Listings shown on the campaign page.
    pub listings_available: usize,
}

async fn health(State(state): State<Arc<AppState>>) -> Response {
    match Catalog::load(state.listings.as_ref()).await {
        Ok(catalog) => Json(HealthResponse {
            status: "ok",
            listings_total: catalog.len(),
            listings_available: available_listings(catalog.listings()).len(),
        })
        .into_response(),
        Err(e) => {
            warn!(error = %e, source = %state.listings.describe(), "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    listings_total: 0,
                    listings_available: 0,
                }),
            )
                .into_response()
        }
    }
}
