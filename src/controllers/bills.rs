//! Bills listing container.
//!
//! Fetches the listing from the remote store and shapes each record for
//! display: ISO dates become the abbreviated French form, statuses keep their
//! typed value (the view renders the label). A record whose date fails to
//! parse keeps its raw date string so one corrupted record never takes the
//! whole listing down.

use crate::{
    core::date::format_display_date,
    entities::Bill,
    errors::Result,
    store::BillStore,
    views::bills::{self, BillsViewState},
};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Container behind the bills listing.
pub struct Bills {
    store: Arc<dyn BillStore>,
}

impl Bills {
    /// Creates the container around its store client.
    #[must_use]
    pub fn new(store: Arc<dyn BillStore>) -> Self {
        Self { store }
    }

    /// Fetches every bill and shapes it for the listing view.
    ///
    /// # Errors
    /// Store failures propagate unchanged; the caller decides how to present
    /// them (the listing renders the error page).
    pub async fn get_bills(&self) -> Result<Vec<Bill>> {
        let mut bills = self.store.list().await?;
        info!("Fetched {} bills", bills.len());

        for bill in &mut bills {
            match NaiveDate::parse_from_str(&bill.date, "%Y-%m-%d") {
                Ok(date) => bill.date = format_display_date(date),
                // Corrupted store data: keep the raw value rather than fail the listing
                Err(_) => warn!("Bill {} has an unparseable date '{}'", bill.id, bill.date),
            }
        }

        Ok(bills)
    }

    /// Renders the listing for the current store contents: the bill table on
    /// success, the error page carrying the failure message otherwise.
    pub async fn render_listing(&self) -> String {
        match self.get_bills().await {
            Ok(bills) => bills::render(&BillsViewState {
                bills,
                loading: false,
                error: None,
            }),
            Err(e) => {
                error!("Failed to fetch bills: {e}");
                bills::render(&BillsViewState {
                    bills: Vec::new(),
                    loading: false,
                    error: Some(e.to_string()),
                })
            }
        }
    }
}
