#![forbid(unsafe_code)]

//! Click dispatch results.

use crate::panel::HeaderId;

/// Outcome of routing a click to the controller.
///
/// `Consumed` means the click was bound to a header and applied; the host
/// should stop propagation and suppress any default action (the header is
/// typically a button or link-styled element). `Ignored` means the id is not
/// bound and the event should fall through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The click toggled a panel.
    Consumed {
        header: HeaderId,
        group: usize,
        panel: usize,
        /// Whether the clicked panel is open after the toggle.
        now_open: bool,
    },
    /// No header with this id is bound.
    Ignored,
}

impl Handled {
    /// Whether the click was applied.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        matches!(self, Self::Consumed { .. })
    }
}
