//! Core business logic - framework-agnostic date handling, receipt
//! validation, and listing order. Nothing in here touches the store or
//! produces markup.

/// Display-date parsing and formatting (`D Mon. YY` with French abbreviations)
pub mod date;
/// Latest-first ordering of bill listings
pub mod listing;
/// Receipt file-extension validation
pub mod receipt;
