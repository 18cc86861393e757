//! Display-date handling for the bill listing.
//!
//! Bills are shown with a localized abbreviated-month date (`4 Avr. 04`).
//! Ordering and conversion both go through [`parse_display_date`], which maps
//! the twelve fixed French abbreviations back to a calendar date in the
//! 2000-2099 window implied by the two-digit year.

use crate::errors::{Error, Result};
use chrono::{Datelike, NaiveDate};

/// The twelve French month abbreviations used by the display format,
/// indexed by zero-based month number.
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan.", "Fév.", "Mar.", "Avr.", "Mai.", "Jui.", "Juil.", "Aoû.", "Sep.", "Oct.", "Nov.",
    "Déc.",
];

fn month_number(abbreviation: &str) -> Option<u32> {
    MONTH_ABBREVIATIONS
        .iter()
        .position(|known| *known == abbreviation)
        .and_then(|index| u32::try_from(index + 1).ok())
}

/// Parses a `D Mon. YY` display date into a calendar date.
///
/// The two-digit year maps to `20YY`, matching the sortable key the listing
/// orders by.
///
/// # Errors
/// Returns [`Error::InvalidDate`] when the value does not have three
/// whitespace-separated parts, the month abbreviation is unknown, or the
/// day/year parts do not form a real date.
pub fn parse_display_date(value: &str) -> Result<NaiveDate> {
    let invalid = || Error::InvalidDate {
        value: value.to_string(),
    };

    let parts: Vec<&str> = value.split_whitespace().collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(invalid());
    };

    let day: u32 = day.parse().map_err(|_| invalid())?;
    let month = month_number(month).ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    if !(0..100).contains(&year) {
        return Err(invalid());
    }

    NaiveDate::from_ymd_opt(2000 + year, month, day).ok_or_else(invalid)
}

/// Formats a calendar date back into the `D Mon. YY` display form.
#[must_use]
pub fn format_display_date(date: NaiveDate) -> String {
    let month = MONTH_ABBREVIATIONS[date.month0() as usize];
    format!("{} {} {:02}", date.day(), month, date.year() % 100)
}
