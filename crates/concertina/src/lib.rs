#![forbid(unsafe_code)]

//! Exclusive-open expansion panels (an accordion, in the "squeezebox" sense).
//!
//! A [`Group`](Accordion) holds an ordered list of [`Panel`]s, each with a
//! clickable [`Header`]. At most one panel per group is open at a time:
//! clicking a closed panel's header opens it and closes whatever else was
//! open, clicking the open panel's header closes it. The open/closed state is
//! held explicitly per group ([`GroupState`]) and projected onto a CSS-class /
//! `aria-expanded` markup surface, so hosts that render HTML can diff class
//! lists while hosts that only care about logical state can query indices.
//!
//! The page-level entry point is [`AccordionController`]: it binds every
//! header to its owning group/panel once at mount, opens the first panel of
//! each group, and then routes clicks by header id.
//!
//! # Example
//!
//! ```
//! use concertina::{Accordion, AccordionController, Panel};
//!
//! let mut page = AccordionController::builder()
//!     .group(Accordion::new(vec![
//!         Panel::titled("Syllabus", "Week-by-week outline"),
//!         Panel::titled("Grading", "40% labs, 60% exam"),
//!     ]))
//!     .mount()
//!     .unwrap();
//!
//! assert!(page.is_open(0, 0)); // first panel opens on mount
//! let id = page.header_id(0, 1).unwrap();
//! page.click(id);
//! assert!(page.is_open(0, 1) && !page.is_open(0, 0));
//! ```

pub mod accordion;
pub mod controller;
pub mod error;
pub mod event;
pub mod markup;
pub mod panel;
pub mod state;

pub use accordion::Accordion;
pub use controller::{AccordionController, ControllerBuilder};
pub use error::{AccordionError, Result};
pub use event::Handled;
pub use markup::ClassNames;
pub use panel::{Header, HeaderId, Panel};
pub use state::{ActiveMarkers, GroupState};
