//! Bill entity - Represents one expense report as served by the remote store.
//!
//! Field names are camelCase on the wire (`fileUrl`, `fileName`); the record
//! only carries a `file_url`/`file_name` pair once its receipt has been
//! staged, and an `id` once the store has accepted it.

use serde::{Deserialize, Serialize};

/// Review status of a submitted expense report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    /// Awaiting review (the status every new submission starts in)
    Pending,
    /// Approved for reimbursement
    Accepted,
    /// Rejected by the reviewer
    Refused,
}

impl BillStatus {
    /// French display label shown in the listing.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "En attente",
            Self::Accepted => "Accepté",
            Self::Refused => "Refusé",
        }
    }
}

/// Expense-report record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Identifier assigned by the remote store on creation
    pub id: String,
    /// Category label (e.g. "Transports")
    #[serde(rename = "type")]
    pub expense_type: String,
    /// Free-text description
    pub name: String,
    /// ISO `YYYY-MM-DD` on the wire; `D Mon. YY` once shaped for the listing
    pub date: String,
    /// Amount in currency units
    pub amount: f64,
    /// Reimbursement rate percentage
    pub pct: u32,
    /// Free-text commentary
    #[serde(default)]
    pub commentary: String,
    /// URL of the staged receipt file, set only after a successful upload
    #[serde(default)]
    pub file_url: Option<String>,
    /// Original name of the staged receipt file
    #[serde(default)]
    pub file_name: Option<String>,
    /// Review status
    pub status: BillStatus,
}
