//! HTTP error types for the Zero-Stress server.
//!
//! Maps domain errors from `zerostress-core` into HTML error pages. Internal
//! details are logged, never rendered: visitors only see a short message.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

use zerostress_core::error::CatalogError;

use crate::html::escape;

/// Application-level error returned from HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Requested page not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, headline, detail) = match &self {
            Self::NotFound(path) => (
                StatusCode::NOT_FOUND,
                "Page not found",
                format!("Nothing lives at {path}."),
            ),
            Self::Internal(reason) => {
                error!(reason = %reason, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong",
                    "Our inventory is temporarily unavailable. Please call or text us.".to_owned(),
                )
            }
        };

        let body = format!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/>\
             <title>{headline}</title></head><body>\
             <main style=\"font-family:sans-serif;max-width:560px;margin:80px auto;text-align:center\">\
             <h1>{headline}</h1><p>{detail}</p><p><a href=\"/\">Back to home</a></p>\
             </main></body></html>",
            detail = escape(&detail),
        );

        (status, Html(body)).into_response()
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Source(_)
            | CatalogError::Malformed { .. }
            | CatalogError::DuplicateId { .. } => Self::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use zerostress_storage::StorageError;

    use super::*;

    #[test]
    fn catalog_errors_are_internal() {
        let errs = [
            CatalogError::Malformed {
                reason: "bad".to_owned(),
            },
            CatalogError::DuplicateId { id: "x".to_owned() },
            CatalogError::Source(StorageError::NotFound {
                path: "/x".to_owned(),
            }),
        ];
        for err in errs {
            assert!(matches!(AppError::from(err), AppError::Internal(_)));
        }
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            AppError::NotFound("/x".to_owned()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Internal("boom".to_owned()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
