//! Price ratio derivation
//!
//! Nightly rate over the minimum stay, guarded against zero or negative
//! minimum-night values.

use crate::Listing;

/// Price per night, or None when the ratio is undefined.
///
/// Undefined when `minimum_nights <= 0` or when the division produces a
/// non-finite value.
pub fn price_per_night(listing: &Listing) -> Option<f64> {
    if listing.minimum_nights <= 0 {
        return None;
    }
    let ratio = listing.price / listing.minimum_nights as f64;
    ratio.is_finite().then_some(ratio)
}
