//! Availability filter and scarcity computation.
//!
//! The campaign page shows exactly the listings whose `available` flag is
//! set, in catalog order, and derives the "N of 25 bundles left" indicator
//! from their count. The percentage is not clamped: a catalog
//! with more than [`BUNDLE_CAPACITY`] available listings yields a value above
//! 100, which the page renders as-is.

use serde::Serialize;

use crate::listing::{Catalog, VehicleListing};

/// Total number of bundles in the promotion.
pub const BUNDLE_CAPACITY: u32 = 25;

/// Listings with `available == true`, in input order.
#[must_use]
pub fn available_listings(listings: &[VehicleListing]) -> Vec<&VehicleListing> {
    listings.iter().filter(|l| l.available).collect()
}

/// The remaining-count / percentage pair behind the scarcity indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scarcity {
    /// Total bundles in the promotion.
    pub capacity: u32,
    /// Bundles still available.
    pub remaining: u32,
}

impl Scarcity {
    /// Scarcity for `remaining` available listings against [`BUNDLE_CAPACITY`].
    #[must_use]
    pub fn new(remaining: usize) -> Self {
        Self {
            capacity: BUNDLE_CAPACITY,
            remaining: u32::try_from(remaining).unwrap_or(u32::MAX),
        }
    }

    /// `remaining / capacity * 100`, unclamped.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        f64::from(self.remaining) * 100.0 / f64::from(self.capacity)
    }

    /// Whether more listings are available than the promotion has bundles.
    #[must_use]
    pub fn is_over_capacity(&self) -> bool {
        self.remaining > self.capacity
    }

    /// Whether the header "N bundles left" badge is shown.
    #[must_use]
    pub fn shows_badge(&self) -> bool {
        self.remaining > 0
    }
}

/// What the campaign page renders from one catalog load.
#[derive(Debug, Clone)]
pub struct Inventory<'a> {
    available: Vec<&'a VehicleListing>,
    scarcity: Scarcity,
}

impl<'a> Inventory<'a> {
    /// Filter the catalog and compute scarcity.
    #[must_use]
    pub fn from_catalog(catalog: &'a Catalog) -> Self {
        let available = available_listings(catalog.listings());
        let scarcity = Scarcity::new(available.len());
        Self {
            available,
            scarcity,
        }
    }

    /// Listings shown in the grid.
    #[must_use]
    pub fn available(&self) -> &[&'a VehicleListing] {
        &self.available
    }

    /// Scarcity indicator values.
    #[must_use]
    pub fn scarcity(&self) -> Scarcity {
        self.scarcity
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::listing::tests::listing;

    fn catalog_with(total: usize, available: usize) -> Catalog {
        let listings = (0..total)
            .map(|i| listing(&format!("id-{i}"), &format!("N{i:04}"), i < available))
            .collect();
        Catalog::from_listings(listings).unwrap()
    }

    // ── filter ───────────────────────────────────────────────────────

    #[test]
    fn filter_keeps_only_available_in_order() {
        let listings = vec![
            listing("a", "N1", true),
            listing("b", "N2", false),
            listing("c", "N3", true),
            listing("d", "N4", false),
            listing("e", "N5", true),
        ];
        let shown: Vec<&str> = available_listings(&listings)
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(shown, vec!["a", "c", "e"]);
    }

    #[test]
    fn filter_empty_input() {
        assert!(available_listings(&[]).is_empty());
    }

    #[test]
    fn filter_none_available() {
        let listings = vec![listing("a", "N1", false), listing("b", "N2", false)];
        assert!(available_listings(&listings).is_empty());
    }

    // ── scarcity ─────────────────────────────────────────────────────

    #[test]
    fn all_twenty_five_available_is_full() {
        let catalog = catalog_with(25, 25);
        let inventory = Inventory::from_catalog(&catalog);
        assert_eq!(inventory.available().len(), 25);
        assert_eq!(inventory.scarcity().remaining, 25);
        assert_eq!(inventory.scarcity().percentage(), 100.0);
    }

    #[test]
    fn one_of_twenty_five_is_four_percent() {
        let catalog = catalog_with(25, 1);
        let inventory = Inventory::from_catalog(&catalog);
        assert_eq!(inventory.available().len(), 1);
        assert_eq!(inventory.scarcity().remaining, 1);
        assert_eq!(inventory.scarcity().percentage(), 4.0);
    }

    #[test]
    fn percentage_is_exact_multiple_of_four() {
        for k in 0..=25 {
            let expected = f64::from(u32::try_from(k).unwrap()) * 4.0;
            assert_eq!(Scarcity::new(k).percentage(), expected, "k = {k}");
        }
    }

    #[test]
    fn zero_remaining_hides_badge() {
        let scarcity = Scarcity::new(0);
        assert_eq!(scarcity.percentage(), 0.0);
        assert!(!scarcity.shows_badge());
        assert!(Scarcity::new(1).shows_badge());
    }

    #[test]
    fn over_capacity_is_not_clamped() {
        let catalog = catalog_with(30, 30);
        let scarcity = Inventory::from_catalog(&catalog).scarcity();
        assert_eq!(scarcity.remaining, 30);
        assert_eq!(scarcity.percentage(), 120.0);
        assert!(scarcity.is_over_capacity());
        assert!(!Scarcity::new(25).is_over_capacity());
    }

    #[test]
    fn capacity_is_fixed() {
        assert_eq!(Scarcity::new(3).capacity, BUNDLE_CAPACITY);
        assert_eq!(BUNDLE_CAPACITY, 25);
    }
}
