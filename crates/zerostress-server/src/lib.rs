//! Zero-Stress bundle site HTTP server.
//!
//! Wires together the core library, the listing source, and the HTTP routes
//! into an Axum application. Serves the landing page at `/`, the campaign
//! page at `/zero-stress-nissan`, static assets under `/assets`, and a
//! health probe at `/health`.

pub mod config;
pub mod error;
pub mod html;
pub mod routes;
pub mod state;
