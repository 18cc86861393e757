//! Bills listing view.
//!
//! Renders one of three mutually exclusive states: the loading page, the
//! error page, or the listing table ordered latest-first. The eye action on
//! each row carries the receipt URL for the shell's preview modal.

use crate::{core::listing::sort_latest_first, entities::Bill};

/// Immutable input of the listing renderer.
#[derive(Clone, Debug, Default)]
pub struct BillsViewState {
    /// Bills to list, already shaped for display
    pub bills: Vec<Bill>,
    /// When set, the loading page wins over everything else
    pub loading: bool,
    /// When set (and not loading), the error page is rendered instead
    pub error: Option<String>,
}

/// Renders the bills view for the given state.
///
/// `loading` takes precedence over `error`, which takes precedence over the
/// table; bill data is ignored entirely in the first two states. An empty
/// bill list renders as a table with an empty body.
#[must_use]
pub fn render(state: &BillsViewState) -> String {
    if state.loading {
        return loading_page();
    }
    if let Some(message) = &state.error {
        return error_page(message);
    }
    listing_page(&rows(&state.bills))
}

/// Placeholder page shown while the listing is being fetched.
#[must_use]
pub fn loading_page() -> String {
    r#"<div class="loading-page" data-testid="loading-message">
  <p>Loading...</p>
</div>"#
        .to_string()
}

/// Error page carrying the failure message verbatim.
#[must_use]
pub fn error_page(message: &str) -> String {
    format!(
        r#"<div class="error-page" data-testid="error-message">
  <p>{message}</p>
</div>"#
    )
}

fn rows(bills: &[Bill]) -> String {
    let mut sorted = bills.to_vec();
    sort_latest_first(&mut sorted);
    sorted.iter().map(row).collect()
}

fn row(bill: &Bill) -> String {
    let file_url = bill.file_url.as_deref().unwrap_or_default();
    format!(
        r#"          <tr>
            <td>{expense_type}</td>
            <td>{name}</td>
            <td>{date}</td>
            <td>{amount} €</td>
            <td>{status}</td>
            <td>
              <div class="icon-actions">
                <div id="eye" data-testid="icon-eye" data-bill-url="{file_url}"></div>
              </div>
            </td>
          </tr>
"#,
        expense_type = bill.expense_type,
        name = bill.name,
        date = bill.date,
        amount = bill.amount,
        status = bill.status.label(),
    )
}

fn listing_page(rows: &str) -> String {
    format!(
        r#"<div class="layout">
  <div class="content">
    <div class="content-header">
      <div class="content-title"> Mes notes de frais </div>
      <button type="button" data-testid="btn-new-bill" class="btn btn-primary">Nouvelle note de frais</button>
    </div>
    <div id="data-table">
      <table id="example" class="table table-striped" style="width:100%">
        <thead>
          <tr>
            <th>Type</th>
            <th>Nom</th>
            <th>Date</th>
            <th>Montant</th>
            <th>Statut</th>
            <th>Actions</th>
          </tr>
        </thead>
        <tbody data-testid="tbody">
{rows}        </tbody>
      </table>
    </div>
  </div>
{modal}</div>"#,
        modal = modal(),
    )
}

// Static container only; the shell's modal plugin fills and opens it.
fn modal() -> String {
    r#"  <div class="modal fade" id="modaleFile" data-testid="modaleFileEmployee" tabindex="-1" role="dialog" aria-hidden="true">
    <div class="modal-dialog modal-dialog-centered modal-lg" role="document">
      <div class="modal-content">
        <div class="modal-header">
          <h5 class="modal-title">Justificatif</h5>
        </div>
        <div class="modal-body"></div>
      </div>
    </div>
  </div>
"#
    .to_string()
}
