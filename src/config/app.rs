//! Application settings read from environment variables.
//!
//! Everything here falls back to a sensible local default so the binary runs
//! against a development store with an empty environment; a `.env` file is
//! loaded before these are read.

use crate::entities::StoredUser;

/// Gets the remote store base URL from `STORE_BASE_URL` or the default local
/// development endpoint.
#[must_use]
pub fn get_store_base_url() -> String {
    std::env::var("STORE_BASE_URL").unwrap_or_else(|_| "http://localhost:5678".to_string())
}

/// Builds the session user from `SESSION_USER_TYPE` / `SESSION_USER_EMAIL`.
///
/// The account kind defaults to `Employee`; the email defaults to empty,
/// which the store treats as an anonymous draft owner.
#[must_use]
pub fn get_session_user() -> StoredUser {
    StoredUser {
        user_type: std::env::var("SESSION_USER_TYPE").unwrap_or_else(|_| "Employee".to_string()),
        email: std::env::var("SESSION_USER_EMAIL").unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_base_url_has_a_default() {
        // Env-dependent: either the configured value or the local default
        let url = get_store_base_url();
        assert!(!url.is_empty());
    }

    #[test]
    fn test_session_user_defaults_to_employee() {
        if std::env::var("SESSION_USER_TYPE").is_err() {
            assert_eq!(get_session_user().user_type, "Employee");
        }
    }
}
