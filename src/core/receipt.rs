//! Receipt file validation.
//!
//! Only image receipts are accepted; anything else (notably `.pdf`) is
//! rejected before any store contact happens.

use crate::errors::{Error, Result};

/// File extensions accepted for receipt uploads, compared case-insensitively.
const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Extracts the extension from a file name, `None` when there is no dot.
#[must_use]
pub fn extension(file_name: &str) -> Option<&str> {
    file_name.rsplit('.').next().filter(|ext| *ext != file_name)
}

/// Checks a receipt file name against the allow-list.
///
/// # Errors
/// Returns [`Error::UnsupportedReceipt`] carrying the offending file name
/// when the extension is missing or not an accepted image type.
pub fn validate_receipt_name(file_name: &str) -> Result<()> {
    let accepted = extension(file_name).is_some_and(|ext| {
        ALLOWED_EXTENSIONS
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext))
    });

    if accepted {
        Ok(())
    } else {
        Err(Error::UnsupportedReceipt {
            file_name: file_name.to_string(),
        })
    }
}
