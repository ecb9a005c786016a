//! Server configuration for the Zero-Stress bundle site.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `ZEROSTRESS_*` environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use zerostress_core::contact::{DEFAULT_DEALER_PHONE, DEFAULT_DEALER_SMS, DealerContact};

/// Default cap on in-flight requests.
const DEFAULT_MAX_CONCURRENCY: usize = 512;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Where listing data comes from.
    pub listings: ListingSourceType,
    /// Directory served under `/assets`.
    pub assets_dir: PathBuf,
    /// Phone and SMS numbers behind the call/text links.
    pub contact: DealerContact,
    /// Maximum number of requests processed at once.
    pub max_concurrency: usize,
}

/// Supported listing sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingSourceType {
    /// Data compiled into the binary.
    Embedded,
    /// JSON file re-read on every campaign render.
    File { path: PathBuf },
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            log_level: "info".to_owned(),
            listings: ListingSourceType::Embedded,
            assets_dir: PathBuf::from("./assets"),
            contact: DealerContact::default(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT`: port to bind on (binds to `0.0.0.0`)
    /// - `ZEROSTRESS_BIND_ADDR`: full bind address (overrides `PORT`, default: `127.0.0.1:8080`)
    /// - `ZEROSTRESS_LOG_LEVEL`: log filter (default: `info`)
    /// - `ZEROSTRESS_LISTINGS_PATH`: JSON listing file (default: embedded data)
    /// - `ZEROSTRESS_ASSETS_DIR`: static asset directory (default: `./assets`)
    /// - `ZEROSTRESS_DEALER_PHONE`: call link number (default: `(555) 123-4567`)
    /// - `ZEROSTRESS_DEALER_SMS`: text link number (default: `5551234567`)
    /// - `ZEROSTRESS_MAX_CONCURRENCY`: in-flight request cap (default: `512`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unparseable values
    /// fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Priority: ZEROSTRESS_BIND_ADDR > PORT > default 127.0.0.1:8080
        let bind_addr = if let Some(addr) = lookup("ZEROSTRESS_BIND_ADDR") {
            addr.parse().unwrap_or(defaults.bind_addr)
        } else if let Some(port_str) = lookup("PORT") {
            let port: u16 = port_str.parse().unwrap_or(defaults.bind_addr.port());
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            defaults.bind_addr
        };

        let log_level = lookup("ZEROSTRESS_LOG_LEVEL").unwrap_or(defaults.log_level);

        let listings = lookup("ZEROSTRESS_LISTINGS_PATH")
            .filter(|p| !p.trim().is_empty())
            .map_or(ListingSourceType::Embedded, |path| ListingSourceType::File {
                path: PathBuf::from(path),
            });

        let assets_dir = lookup("ZEROSTRESS_ASSETS_DIR")
            .map_or(defaults.assets_dir, PathBuf::from);

        let contact = DealerContact {
            phone: lookup("ZEROSTRESS_DEALER_PHONE")
                .unwrap_or_else(|| DEFAULT_DEALER_PHONE.to_owned()),
            sms: lookup("ZEROSTRESS_DEALER_SMS").unwrap_or_else(|| DEFAULT_DEALER_SMS.to_owned()),
        };

        let max_concurrency = lookup("ZEROSTRESS_MAX_CONCURRENCY")
            .and_then(|v| v.parse().ok())
            .filter(|n: &usize| *n > 0)
            .unwrap_or(defaults.max_concurrency);

        Self {
            bind_addr,
            log_level,
            listings,
            assets_dir,
            contact,
            max_concurrency,
        }
    }
}
