#![forbid(unsafe_code)]

//! The per-group widget: an ordered list of panels plus markup configuration.
//!
//! An `Accordion` is pure description. It owns no open/closed state; pair it
//! with a [`GroupState`](crate::state::GroupState) through the controller.

use crate::markup::ClassNames;
use crate::panel::Panel;

/// One accordion instance: a group of mutually exclusive panels.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    panels: Vec<Panel>,
    classes: ClassNames,
}

impl Accordion {
    /// Create a group from panels in document order.
    #[must_use]
    pub fn new(panels: impl IntoIterator<Item = Panel>) -> Self {
        Self {
            panels: panels.into_iter().collect(),
            classes: ClassNames::default(),
        }
    }

    /// Override the markup class names.
    #[must_use]
    pub fn class_names(mut self, names: ClassNames) -> Self {
        self.classes = names;
        self
    }

    /// Panels in document order.
    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// The markup class-name set in effect.
    #[must_use]
    pub const fn classes(&self) -> &ClassNames {
        &self.classes
    }
}
