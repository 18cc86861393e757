//! New-bill composition container.
//!
//! Owns the lifecycle of one expense report: receipt selection and staging
//! through the store's file-creation operation, then submission of the
//! completed record through its update operation. The staged `file_url`,
//! `file_name` and `bill_id` are plain public fields; tests read them
//! directly.
//!
//! Failure presentation is deliberately asymmetric: a staging failure
//! propagates to the caller, a submission failure is logged and swallowed
//! (the user stays on the form, no navigation happens).

use crate::{
    controllers::{FormEvent, Navigator, Route},
    core::receipt::validate_receipt_name,
    entities::BillStatus,
    errors::Result,
    session::SessionStore,
    store::{BillPayload, BillStore, ReceiptUpload},
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Reimbursement rate applied when the field is left empty.
const DEFAULT_PCT: u32 = 20;

/// Bound form fields of the new-bill view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewBillForm {
    /// Selected expense category
    pub expense_type: String,
    /// Free-text description
    pub name: String,
    /// ISO date from the date picker
    pub date: String,
    /// Amount as entered
    pub amount: String,
    /// Reimbursement percentage as entered
    pub pct: String,
    /// Free-text commentary
    pub commentary: String,
    /// Current value of the file input
    pub file_input_value: String,
    /// Whether the inline receipt-format error indicator is shown
    pub error_visible: bool,
}

/// Container behind the new-bill form.
pub struct NewBill {
    store: Arc<dyn BillStore>,
    session: Arc<SessionStore>,
    navigator: Navigator,
    /// The bound form fields
    pub form: NewBillForm,
    /// URL of the staged receipt, set after a successful upload
    pub file_url: Option<String>,
    /// Name of the staged receipt, set after a successful upload
    pub file_name: Option<String>,
    /// Draft record key returned by the upload, used to update that bill
    pub bill_id: Option<String>,
}

impl NewBill {
    /// Creates the container around its collaborators.
    #[must_use]
    pub fn new(store: Arc<dyn BillStore>, session: Arc<SessionStore>, navigator: Navigator) -> Self {
        Self {
            store,
            session,
            navigator,
            form: NewBillForm::default(),
            file_url: None,
            file_name: None,
            bill_id: None,
        }
    }

    /// Handles a receipt-file selection.
    ///
    /// An invalid extension shows the inline error indicator, clears the file
    /// input and never contacts the store. A valid file is uploaded together
    /// with the session user's email; on success the returned `file_url`,
    /// `file_name` and `key` are staged and the indicator is hidden.
    ///
    /// # Errors
    /// A store rejection during the upload propagates to the caller; the
    /// staged fields stay unset.
    pub async fn handle_change_file(&mut self, event: &mut FormEvent) -> Result<()> {
        event.prevent_default();
        self.form.file_input_value = event.target.value.clone();

        let Some(file) = event.target.files.first().cloned() else {
            return Ok(());
        };

        if validate_receipt_name(&file.name).is_err() {
            warn!("Rejected receipt file '{}'", file.name);
            self.form.error_visible = true;
            self.form.file_input_value = String::new();
            return Ok(());
        }

        let email = self.session.user()?.email;
        let staged = self.store.create(ReceiptUpload { file, email }).await?;

        info!("Staged receipt '{}' for bill {}", staged.file_name, staged.key);
        self.file_url = Some(staged.file_url);
        self.file_name = Some(staged.file_name);
        self.bill_id = Some(staged.key);
        self.form.error_visible = false;
        Ok(())
    }

    /// Handles the form submission.
    ///
    /// Builds the complete bill (status `pending`) from the form fields plus
    /// the staged receipt and issues exactly one store update. On success the
    /// navigator returns the user to the bills listing; on failure the error
    /// is logged with the store's message and nothing else happens - no
    /// navigation, no retry, no inline feedback.
    ///
    /// # Errors
    /// Only a missing or corrupted session user surfaces as an error; store
    /// failures are swallowed after logging.
    pub async fn handle_submit(&mut self, event: &mut FormEvent) -> Result<()> {
        event.prevent_default();

        let payload = self.build_payload()?;
        let selector = self.bill_id.clone().unwrap_or_default();

        match self.store.update(&selector, &payload).await {
            Ok(bill) => {
                info!("Submitted bill {}", bill.id);
                (self.navigator)(Route::Bills);
            }
            Err(e) => error!("Failed to submit bill: {e}"),
        }
        Ok(())
    }

    fn build_payload(&self) -> Result<BillPayload> {
        let email = self.session.user()?.email;
        Ok(BillPayload {
            email,
            expense_type: self.form.expense_type.clone(),
            name: self.form.name.clone(),
            date: self.form.date.clone(),
            amount: self.form.amount.trim().parse().unwrap_or_default(),
            pct: self.form.pct.trim().parse().unwrap_or(DEFAULT_PCT),
            commentary: self.form.commentary.clone(),
            file_url: self.file_url.clone(),
            file_name: self.file_name.clone(),
            status: BillStatus::Pending,
        })
    }
}
