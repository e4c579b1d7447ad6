//! Boolean flag derivations
//!
//! 0/1 indicator columns computed from single listing fields.

use crate::{Listing, ENTIRE_HOME_LABEL};

/// 1 if the listing has been reviewed at least once
pub fn has_review(listing: &Listing) -> u8 {
    u8::from(listing.number_of_reviews > 0)
}

/// 1 if the listing is bookable at all this year
pub fn active_listing(listing: &Listing) -> u8 {
    u8::from(listing.availability_365 > 0)
}

/// 1 if the whole property is listed rather than a room
pub fn is_entire_home(listing: &Listing) -> u8 {
    u8::from(listing.room_type == ENTIRE_HOME_LABEL)
}
