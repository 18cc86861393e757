//! View layer - pure markup rendering.
//!
//! Every function in here maps an immutable view state to a markup string and
//! nothing else: no store access, no session access, no errors raised.
//! Opening the receipt modal and highlighting navigation icons belong to the
//! surrounding shell, which hooks onto the `data-testid`/`data-bill-url`
//! attributes these views emit.

/// Bills listing, loading and error pages
pub mod bills;
/// New-bill composition form
pub mod new_bill;
