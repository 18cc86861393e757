//! Shared test utilities for `BillBuddy`.
//!
//! This module provides a configurable in-memory store, bill fixtures
//! matching the records the remote store serves, and small helpers for
//! building sessions, events and receipt files with sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    controllers::{EventTarget, FormEvent, Navigator, Route},
    entities::{Bill, BillStatus, StoredUser},
    errors::{Error, Result},
    session::SessionStore,
    store::{BillPayload, BillStore, ReceiptFile, ReceiptUpload, StagedReceipt},
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the remote store.
///
/// Records every `create` and `update` call so tests can assert call counts
/// and payloads. When `fail_with` is set, every operation rejects with that
/// message instead.
pub struct MockBillStore {
    /// Bills returned by `list`; a successful `update` appends its result
    pub bills: Mutex<Vec<Bill>>,
    /// `fileUrl` returned by `create`
    pub file_url: String,
    /// Draft record key returned by `create`
    pub key: String,
    /// When set, every operation rejects with this message
    pub fail_with: Option<String>,
    /// Every upload passed to `create`
    pub created: Mutex<Vec<ReceiptUpload>>,
    /// Every `(selector, payload)` passed to `update`
    pub updated: Mutex<Vec<(String, BillPayload)>>,
}

impl Default for MockBillStore {
    fn default() -> Self {
        Self {
            bills: Mutex::new(Vec::new()),
            file_url: "https://localhost:3456/images/test.jpg".to_string(),
            key: "1234".to_string(),
            fail_with: None,
            created: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
        }
    }
}

impl MockBillStore {
    /// A store whose `list` serves the given bills.
    #[must_use]
    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills: Mutex::new(bills),
            ..Self::default()
        }
    }

    /// A store whose every operation rejects with `message`.
    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    fn check_failure(&self) -> Result<()> {
        match &self.fail_with {
            Some(message) => Err(Error::Store {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BillStore for MockBillStore {
    async fn list(&self) -> Result<Vec<Bill>> {
        self.check_failure()?;
        Ok(self.bills.lock().unwrap().clone())
    }

    async fn create(&self, upload: ReceiptUpload) -> Result<StagedReceipt> {
        self.check_failure()?;
        let staged = StagedReceipt {
            file_url: self.file_url.clone(),
            file_name: upload.file.name.clone(),
            key: self.key.clone(),
        };
        self.created.lock().unwrap().push(upload);
        Ok(staged)
    }

    async fn update(&self, selector: &str, payload: &BillPayload) -> Result<Bill> {
        self.check_failure()?;
        self.updated
            .lock()
            .unwrap()
            .push((selector.to_string(), payload.clone()));
        let bill = Bill {
            id: if selector.is_empty() {
                self.key.clone()
            } else {
                selector.to_string()
            },
            expense_type: payload.expense_type.clone(),
            name: payload.name.clone(),
            date: payload.date.clone(),
            amount: payload.amount,
            pct: payload.pct,
            commentary: payload.commentary.clone(),
            file_url: payload.file_url.clone(),
            file_name: payload.file_name.clone(),
            status: payload.status,
        };
        self.bills.lock().unwrap().push(bill.clone());
        Ok(bill)
    }
}

/// Creates a bill with sensible defaults.
///
/// # Defaults
/// * `expense_type`: "Transports"
/// * `amount`: 100.0, `pct`: 20
/// * `status`: pending
/// * `file_url`: the mock store's receipt URL
#[must_use]
pub fn make_bill(name: &str, date: &str) -> Bill {
    Bill {
        id: format!("bill-{name}"),
        expense_type: "Transports".to_string(),
        name: name.to_string(),
        date: date.to_string(),
        amount: 100.0,
        pct: 20,
        commentary: String::new(),
        file_url: Some("https://localhost:3456/images/test.jpg".to_string()),
        file_name: Some("test.jpg".to_string()),
        status: BillStatus::Pending,
    }
}

/// Four bills with display dates, for renderer and ordering tests.
#[must_use]
pub fn sample_bills() -> Vec<Bill> {
    vec![
        Bill {
            expense_type: "Hôtel et logement".to_string(),
            amount: 400.0,
            status: BillStatus::Accepted,
            ..make_bill("encore", "4 Avr. 04")
        },
        Bill {
            amount: 100.0,
            ..make_bill("test1", "1 Jan. 01")
        },
        Bill {
            expense_type: "Services en ligne".to_string(),
            amount: 300.0,
            status: BillStatus::Refused,
            ..make_bill("test3", "3 Mar. 03")
        },
        Bill {
            expense_type: "Restaurants et bars".to_string(),
            amount: 200.0,
            ..make_bill("test2", "2 Fév. 02")
        },
    ]
}

/// The same four bills with ISO dates, as the remote store serves them.
#[must_use]
pub fn sample_store_bills() -> Vec<Bill> {
    let mut bills = sample_bills();
    for (bill, iso) in bills
        .iter_mut()
        .zip(["2004-04-04", "2001-01-01", "2003-03-03", "2002-02-02"])
    {
        bill.date = iso.to_string();
    }
    bills
}

/// A session holding an Employee user with the given email.
#[must_use]
pub fn employee_session(email: &str) -> Arc<SessionStore> {
    let mut session = SessionStore::new();
    session
        .set_user(&StoredUser {
            user_type: "Employee".to_string(),
            email: email.to_string(),
        })
        .unwrap();
    Arc::new(session)
}

/// A navigator that records every route it is asked to go to.
#[must_use]
pub fn recording_navigator() -> (Navigator, Arc<Mutex<Vec<Route>>>) {
    let routes = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&routes);
    let navigator: Navigator = Box::new(move |route| recorded.lock().unwrap().push(route));
    (navigator, routes)
}

/// A jpeg receipt file with the given name.
#[must_use]
pub fn jpg_file(name: &str) -> ReceiptFile {
    ReceiptFile {
        name: name.to_string(),
        content_type: "image/jpg".to_string(),
        bytes: b"image".to_vec(),
    }
}

/// A pdf file with the given name, for rejection tests.
#[must_use]
pub fn pdf_file(name: &str) -> ReceiptFile {
    ReceiptFile {
        name: name.to_string(),
        content_type: "application/pdf".to_string(),
        bytes: b"document".to_vec(),
    }
}

/// A change event carrying one selected file.
#[must_use]
pub fn change_event(file: ReceiptFile) -> FormEvent {
    FormEvent::new(EventTarget {
        value: file.name.clone(),
        files: vec![file],
    })
}

/// A bare submit event.
#[must_use]
pub fn submit_event() -> FormEvent {
    FormEvent::default()
}
