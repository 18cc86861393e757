//! Session accessor for the signed-in user.
//!
//! A small key-value store holding JSON strings, created once at application
//! bootstrap and handed to containers explicitly. Logging out is dropping the
//! store and building a fresh one.

use crate::{
    entities::StoredUser,
    errors::{Error, Result},
};
use std::collections::HashMap;

/// Key the signed-in user is stored under.
pub const USER_KEY: &str = "user";

/// In-memory key-value session store.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    entries: HashMap<String, String>,
}

impl SessionStore {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a raw value under `key`, replacing any previous one.
    pub fn set_item(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_string(), value.into());
    }

    /// Reads the raw value stored under `key`.
    #[must_use]
    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Stores the signed-in user as JSON under [`USER_KEY`].
    ///
    /// # Errors
    /// Returns a serialization error if the user cannot be encoded.
    pub fn set_user(&mut self, user: &StoredUser) -> Result<()> {
        let json = serde_json::to_string(user)?;
        self.set_item(USER_KEY, json);
        Ok(())
    }

    /// Reads the signed-in user back out of the session.
    ///
    /// # Errors
    /// Returns [`Error::Session`] when no user is stored, or a serialization
    /// error when the stored value is not a valid user record.
    pub fn user(&self) -> Result<StoredUser> {
        let raw = self.get_item(USER_KEY).ok_or_else(|| Error::Session {
            message: "no user in session".to_string(),
        })?;
        serde_json::from_str(raw).map_err(Into::into)
    }
}
