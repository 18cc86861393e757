//! Remote store client - the only persistence this crate talks to.
//!
//! The surface is exactly the three operations the dashboard consumes:
//! listing bills, staging a receipt file, and updating a bill record. The
//! trait keeps containers testable against an in-memory stand-in; the HTTP
//! implementation lives in [`http`].

/// HTTP implementation backed by `reqwest`
pub mod http;

use crate::{
    entities::{Bill, BillStatus},
    errors::Result,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A receipt file selected by the user, pending upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptFile {
    /// Original file name, extension included
    pub name: String,
    /// MIME type reported by the platform
    pub content_type: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

/// Multipart payload of the store's file-creation operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptUpload {
    /// The receipt file itself
    pub file: ReceiptFile,
    /// Email of the signed-in user the draft bill belongs to
    pub email: String,
}

/// What the store hands back once a receipt file is staged: the reference to
/// the uploaded file plus the draft record's key, needed to update that
/// specific bill later.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StagedReceipt {
    pub file_url: String,
    pub file_name: String,
    pub key: String,
}

/// Complete bill record sent to the store's update operation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPayload {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    /// ISO date as entered in the date picker
    pub date: String,
    pub amount: f64,
    pub pct: u32,
    pub commentary: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
}

/// The remote bills API. Every operation is a single attempt: no retries, no
/// cancellation of superseded in-flight requests.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// Fetches every bill visible to the signed-in user.
    async fn list(&self) -> Result<Vec<Bill>>;

    /// Uploads a receipt file, creating the draft bill record it belongs to.
    async fn create(&self, upload: ReceiptUpload) -> Result<StagedReceipt>;

    /// Replaces the draft record selected by `selector` with the complete bill.
    async fn update(&self, selector: &str, payload: &BillPayload) -> Result<Bill>;
}
