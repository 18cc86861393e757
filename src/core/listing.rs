//! Listing order for bills.
//!
//! The listing always shows the most recent expense first. Ordering goes
//! through the display-date parser; a bill whose date does not parse sorts
//! after every dated one, and ties keep their input order (stable sort).

use crate::{core::date::parse_display_date, entities::Bill};
use std::cmp::Ordering;

/// Sorts bills by descending display date, in place.
pub fn sort_latest_first(bills: &mut [Bill]) {
    bills.sort_by(|a, b| {
        match (
            parse_display_date(&a.date).ok(),
            parse_display_date(&b.date).ok(),
        ) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}
