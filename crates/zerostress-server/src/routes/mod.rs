//! HTTP route handlers for the Zero-Stress site.
//!
//! Routes are organized by page:
//! - `ui`: Landing page, shared page shell and CSS, 404 fallback
//! - `campaign`: The bundle campaign page and its query-string UI state
//! - `health`: Liveness probe reporting listing counts

pub mod campaign;
pub mod health;
pub mod ui;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
///
/// `assets_dir` is served under `/assets`. `max_concurrency` caps in-flight
/// requests across all routes together: every route shares one semaphore.
pub fn build_router(state: Arc<AppState>, assets_dir: &Path, max_concurrency: usize) -> Router {
    Router::new()
        .merge(ui::router())
        .merge(campaign::router())
        .merge(health::router())
        .nest_service("/assets", ServeDir::new(assets_dir))
        .fallback(ui::not_found)
        .layer(GlobalConcurrencyLimitLayer::new(max_concurrency))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .with_state(state)
}
