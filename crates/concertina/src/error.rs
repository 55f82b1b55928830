#![forbid(unsafe_code)]

//! Error types for controller construction.
//!
//! Click dispatch itself is infallible: unknown headers are reported as
//! [`Handled::Ignored`](crate::event::Handled) rather than errors. The only
//! failures are structural, caught once at mount.

use thiserror::Error;

use crate::panel::HeaderId;

pub type Result<T> = std::result::Result<T, AccordionError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccordionError {
    /// A panel description carries no header, so nothing could ever toggle it.
    #[error("panel {panel} in group {group} has no header")]
    MissingHeader { group: usize, panel: usize },

    /// Two headers were assigned the same explicit id.
    #[error("duplicate header id {id:?}")]
    DuplicateHeader { id: HeaderId },
}
