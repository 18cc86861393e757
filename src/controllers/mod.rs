//! Container layer - controllers wiring form events to the remote store.
//!
//! Containers receive their collaborators (store client, session accessor,
//! navigator) explicitly at construction; nothing ambient is read. Platform
//! events reach them through the minimal [`FormEvent`] interface so any event
//! system can be adapted to it.

/// Bills listing container
pub mod bills;
/// New-bill composition container
pub mod new_bill;

/// Application routes the containers can navigate to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// The bills listing
    Bills,
    /// The new-bill form
    NewBill,
}

/// Callback handed to containers for returning control to the routing shell.
pub type Navigator = Box<dyn Fn(Route) + Send + Sync>;

/// What an event exposes of its target: the input's string value and the
/// files selected into it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventTarget {
    /// Current value of the bound input
    pub value: String,
    /// Files selected into the bound input, if any
    pub files: Vec<crate::store::ReceiptFile>,
}

/// Minimal form-event interface: `prevent_default()` plus a target carrying
/// `value` and `files`.
#[derive(Clone, Debug, Default)]
pub struct FormEvent {
    /// The event's target input
    pub target: EventTarget,
    default_prevented: bool,
}

impl FormEvent {
    /// Creates an event for the given target.
    #[must_use]
    pub fn new(target: EventTarget) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    /// Suppresses the platform's default handling of this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether `prevent_default` has been called.
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
