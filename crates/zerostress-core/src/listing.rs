//! Vehicle listings and the catalog loader.
//!
//! A listing is one vehicle eligible for the bundle. The catalog is the full
//! collection as read from a [`ListingSource`], available or not, in source
//! order. Catalogs are built per page render and never written back.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use zerostress_storage::{EmbeddedSource, ListingSource};

use crate::error::CatalogError;

/// Listing data shipped with the binary.
pub const ELIGIBLE_VINS_JSON: &[u8] = include_bytes!("../data/eligible-vins.json");

/// Source for the listing data shipped with the binary.
#[must_use]
pub const fn embedded_source() -> EmbeddedSource {
    EmbeddedSource::new("eligible-vins.json", ELIGIBLE_VINS_JSON)
}

/// One vehicle record eligible for the promotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleListing {
    /// Unique identifier.
    pub id: String,
    /// Model year, as printed (e.g. `2025`).
    pub year: String,
    /// Model name (e.g. `Rogue`).
    pub model: String,
    /// Trim level (e.g. `SV AWD`).
    pub trim: String,
    /// Dealer stock number.
    pub stock: String,
    /// Vehicle identification number.
    pub vin: String,
    /// Exterior color.
    pub color: String,
    /// Feature highlights, in display order.
    pub highlights: Vec<String>,
    /// Whether the vehicle is still available for the bundle.
    pub available: bool,
}

impl VehicleListing {
    /// Card heading: `year model trim`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {} {}", self.year, self.model, self.trim)
    }
}

/// The full listing collection, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    listings: Vec<VehicleListing>,
}

impl Catalog {
    /// Build a catalog from already-parsed listings.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two listings share an `id`.
    pub fn from_listings(listings: Vec<VehicleListing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(listings.len());
        for listing in &listings {
            if !seen.insert(listing.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: listing.id.clone(),
                });
            }
        }
        Ok(Self { listings })
    }

    /// Parse a catalog from a JSON array of listing records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] if the bytes are not a JSON array
    /// of complete listing records, or [`CatalogError::DuplicateId`] if two
    /// records share an `id`.
    pub fn from_json(bytes: &[u8]) -> Result<Self, CatalogError> {
        let listings: Vec<VehicleListing> =
            serde_json::from_slice(bytes).map_err(|e| CatalogError::Malformed {
                reason: e.to_string(),
            })?;
        Self::from_listings(listings)
    }

    /// Fetch and parse the catalog from a listing source.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Source`] if the source cannot be read, or any
    /// error from [`Catalog::from_json`].
    pub async fn load(source: &dyn ListingSource) -> Result<Self, CatalogError> {
        let bytes = source.fetch().await?;
        let catalog = Self::from_json(&bytes)?;
        debug!(
            source = %source.describe(),
            listings = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// All listings, available or not.
    #[must_use]
    pub fn listings(&self) -> &[VehicleListing] {
        &self.listings
    }

    /// Number of listings in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the catalog holds no listings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use zerostress_storage::{FileSource, MemorySource};

    use super::*;

    pub(crate) fn listing(id: &str, stock: &str, available: bool) -> VehicleListing {
        VehicleListing {
            id: id.to_owned(),
            year: "2025".to_owned(),
            model: "Rogue".to_owned(),
            trim: "SV AWD".to_owned(),
            stock: stock.to_owned(),
            vin: format!("JN8BT3BB7SW2{stock:0>5}"),
            color: "Boulder Gray Pearl".to_owned(),
            highlights: vec!["ProPILOT Assist".to_owned(), "Heated seats".to_owned()],
            available,
        }
    }

    #[test]
    fn embedded_data_parses() {
        let catalog = Catalog::from_json(ELIGIBLE_VINS_JSON).unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.listings().iter().any(|l| l.available));
        assert!(catalog.listings().iter().all(|l| l.vin.len() == 17));
    }

    #[test]
    fn from_json_preserves_source_order() {
        let json = serde_json::to_vec(&vec![
            listing("c", "N3", true),
            listing("a", "N1", false),
            listing("b", "N2", true),
        ])
        .unwrap();
        let catalog = Catalog::from_json(&json).unwrap();
        let ids: Vec<&str> = catalog.listings().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn from_json_empty_array_is_empty_catalog() {
        let catalog = Catalog::from_json(b"[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn from_json_rejects_non_array() {
        let err = Catalog::from_json(br#"{"id":"x"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
    }

    #[test]
    fn from_json_rejects_missing_field() {
        let json = br#"[{"id":"1","year":"2025","model":"Kicks","trim":"SV","stock":"N1","vin":"X","color":"Red","highlights":[]}]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(
            matches!(err, CatalogError::Malformed { ref reason } if reason.contains("available")),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn from_json_rejects_duplicate_ids() {
        let json = serde_json::to_vec(&vec![
            listing("dup", "N1", true),
            listing("dup", "N2", true),
        ])
        .unwrap();
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { ref id } if id == "dup"));
    }

    #[test]
    fn duplicate_stock_numbers_are_allowed() {
        let catalog =
            Catalog::from_listings(vec![listing("a", "N1", true), listing("b", "N1", true)])
                .unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn title_joins_year_model_trim() {
        assert_eq!(listing("a", "N1", true).title(), "2025 Rogue SV AWD");
    }

    #[tokio::test]
    async fn load_reads_through_source() {
        let json = serde_json::to_vec(&vec![listing("a", "N1", true)]).unwrap();
        let source = MemorySource::new(json);
        let catalog = Catalog::load(&source).await.unwrap();
        assert_eq!(catalog.listings()[0].stock, "N1");
    }

    #[tokio::test]
    async fn load_surfaces_source_errors() {
        let source = FileSource::new("/definitely/not/here/vins.json");
        let err = Catalog::load(&source).await.unwrap_err();
        assert!(matches!(err, CatalogError::Source(_)));
    }

    #[tokio::test]
    async fn load_embedded_source() {
        let catalog = Catalog::load(&embedded_source()).await.unwrap();
        assert_eq!(catalog, Catalog::from_json(ELIGIBLE_VINS_JSON).unwrap());
    }
}
