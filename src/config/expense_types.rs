//! Expense-type catalog loading from config.toml
//!
//! The new-bill form offers a fixed set of expense categories. They can be
//! overridden from a TOML configuration file; when no file is present the
//! built-in catalog is used.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the expense-type section of config.toml
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Expense categories offered by the new-bill form
    pub expense_types: Vec<ExpenseTypeConfig>,
}

/// Configuration for a single expense category
#[derive(Debug, Deserialize, Clone)]
pub struct ExpenseTypeConfig {
    /// Display name of the category
    pub name: String,
}

/// Loads the expense-type catalog from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// The built-in expense categories, used when no config.toml overrides them.
#[must_use]
pub fn default_expense_types() -> Vec<String> {
    [
        "Transports",
        "Restaurants et bars",
        "Hôtel et logement",
        "Services en ligne",
        "IT et électronique",
        "Equipement et matériel",
        "Fournitures de bureau",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

/// Loads the catalog from `./config.toml`, falling back to the built-in list.
#[must_use]
pub fn load_or_default() -> Vec<String> {
    load_config("config.toml").map_or_else(
        |_| default_expense_types(),
        |config| {
            config
                .expense_types
                .into_iter()
                .map(|expense_type| expense_type.name)
                .collect()
        },
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_expense_type_config() {
        let toml_str = r#"
            [[expense_types]]
            name = "Transports"

            [[expense_types]]
            name = "Restaurants et bars"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.expense_types.len(), 2);
        assert_eq!(config.expense_types[0].name, "Transports");
        assert_eq!(config.expense_types[1].name, "Restaurants et bars");
    }

    #[test]
    fn test_default_catalog_is_complete() {
        let types = default_expense_types();
        assert_eq!(types.len(), 7);
        assert!(types.contains(&"Transports".to_string()));
        assert!(types.contains(&"Fournitures de bureau".to_string()));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_config("does-not-exist.toml").is_err());
    }
}
