/// Remote store endpoint and session-user settings from the environment
pub mod app;

/// Expense-type catalog loading from config.toml
pub mod expense_types;
