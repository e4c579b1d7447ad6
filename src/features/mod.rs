//! Feature derivation
//!
//! Pure per-row derivations over listing fields, plus the pipeline that
//! applies them to a whole table.

pub mod flags;
pub mod price;

use crate::data::ListingTable;
use crate::{AvailabilityBand, Listing, Result};

/// Names of the derived columns, in the order they are appended
pub const DERIVED_COLUMNS: [&str; 5] = [
    "has_review",
    "price_per_night",
    "active_listing",
    "seasonal_availability",
    "is_entire_home",
];

/// The derived feature values for one listing row
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedFeatures {
    pub has_review: u8,
    pub price_per_night: Option<f64>,
    pub active_listing: u8,
    pub seasonal_availability: AvailabilityBand,
    pub is_entire_home: u8,
}

impl DerivedFeatures {
    /// Render as CSV cells, missing price as an empty field
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.has_review.to_string(),
            self.price_per_night
                .map(|p| p.to_string())
                .unwrap_or_default(),
            self.active_listing.to_string(),
            self.seasonal_availability.label().to_string(),
            self.is_entire_home.to_string(),
        ]
    }
}

/// Compute all derived features for a single listing
pub fn derive_all(listing: &Listing) -> DerivedFeatures {
    DerivedFeatures {
        has_review: flags::has_review(listing),
        price_per_night: price::price_per_night(listing),
        active_listing: flags::active_listing(listing),
        seasonal_availability: AvailabilityBand::from_days(listing.availability_365),
        is_entire_home: flags::is_entire_home(listing),
    }
}

/// Summary of one featurize pass over a table
#[derive(Debug, Clone, Copy)]
pub struct FeaturizeSummary {
    /// Rows processed
    pub rows: usize,
    /// Rows where price_per_night could not be computed
    pub missing_price: usize,
}

/// Derive features for every row and append them as new columns
pub fn featurize(table: &mut ListingTable) -> Result<FeaturizeSummary> {
    let mut cells = Vec::with_capacity(table.len());
    let mut missing_price = 0;

    for index in 0..table.len() {
        let listing = table.listing(index)?;
        let features = derive_all(&listing);
        if features.price_per_night.is_none() {
            missing_price += 1;
        }
        cells.push(features.to_cells());
    }

    let rows = cells.len();
    table.append_columns(&DERIVED_COLUMNS, cells)?;

    Ok(FeaturizeSummary {
        rows,
        missing_price,
    })
}
