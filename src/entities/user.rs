//! User entity - The signed-in user as stored in the session.

use serde::{Deserialize, Serialize};

/// The user record kept under the session's `user` key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    /// Account kind, `"Employee"` for everyone using this dashboard
    #[serde(rename = "type")]
    pub user_type: String,
    /// Email attached to uploaded receipts and submitted bills
    #[serde(default)]
    pub email: String,
}
