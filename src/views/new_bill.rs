//! New-bill form view.
//!
//! Pure markup for the expense-report composition form. The expense-type
//! options come from the configured catalog; the inline error indicator
//! starts hidden and is toggled by the controller through form state, not by
//! re-rendering.

/// Renders the new-bill form with the given expense-type options.
#[must_use]
pub fn render(expense_types: &[String]) -> String {
    format!(
        r#"<div class="form-newbill-container content-inner">
  <div class="heading">Envoyer une note de frais</div>
  <form data-testid="form-new-bill">
    <div class="row">
      <div class="col-md-6">
        <div class="col-half">
          <label for="expense-type" class="bold-label">Type de dépense</label>
          <select required data-testid="expense-type" class="form-control blue-border">
{options}        </select>
        </div>
        <div class="col-half">
          <label for="expense-name" class="bold-label">Nom de la dépense</label>
          <input type="text" data-testid="expense-name" class="form-control blue-border" placeholder="Vol Paris Londres" />
        </div>
        <div class="col-half">
          <label for="datepicker" class="bold-label">Date</label>
          <input required type="date" data-testid="datepicker" class="form-control blue-border" />
        </div>
        <div class="col-half">
          <label for="amount" class="bold-label">Montant TTC </label>
          <input required type="number" data-testid="amount" class="form-control blue-border input-icon input-icon-right" placeholder="348" />
        </div>
      </div>
      <div class="col-md-6">
        <div class="col-half">
          <label for="pct" class="bold-label">%</label>
          <input required type="number" data-testid="pct" class="form-control blue-border" placeholder="20" />
        </div>
        <div class="col-half">
          <label for="commentary" class="bold-label">Commentaire</label>
          <textarea data-testid="commentary" class="form-control blue-border" rows="3"></textarea>
        </div>
        <div class="col-half">
          <label for="file" class="bold-label">Justificatif</label>
          <input required type="file" data-testid="file" class="form-control blue-border" />
          <span data-testid="errorMessage" class="errorMessage hidden">Le justificatif doit être au format jpg, jpeg ou png</span>
        </div>
      </div>
    </div>
    <div class="col-md-6">
      <button type="submit" data-testid="submit-button" id="btn-send-bill" class="btn btn-primary">Envoyer</button>
    </div>
  </form>
</div>"#,
        options = options(expense_types),
    )
}

fn options(expense_types: &[String]) -> String {
    expense_types
        .iter()
        .map(|name| format!("            <option value=\"{name}\">{name}</option>\n"))
        .collect()
}
