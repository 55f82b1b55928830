#![forbid(unsafe_code)]

//! Panel and header building blocks.
//!
//! A [`Panel`] is one expandable section: a clickable [`Header`] plus opaque
//! body content. Panels never toggle themselves; all state lives in the
//! owning group (see [`GroupState`](crate::state::GroupState)) and is driven
//! through the controller.

/// Stable identity of a header, used to route clicks.
///
/// Ids are normally assigned by the controller at mount time in document
/// order; [`Header::with_id`] pins an explicit id instead (useful when the
/// host keeps its own element registry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeaderId(pub u64);

/// The clickable control that toggles its owning panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    label: String,
    id: Option<HeaderId>,
}

impl Header {
    /// Create a header with a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: None,
        }
    }

    /// Pin an explicit id instead of letting the controller assign one.
    #[must_use]
    pub const fn with_id(mut self, id: HeaderId) -> Self {
        self.id = Some(id);
        self
    }

    /// Header label text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Explicit id, if one was pinned.
    #[must_use]
    pub const fn id(&self) -> Option<HeaderId> {
        self.id
    }
}

/// One expandable/collapsible section within a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    header: Option<Header>,
    body: String,
    preset_active: bool,
}

impl Panel {
    /// Create a panel with body content and no header yet.
    ///
    /// A panel without a header fails validation at mount
    /// ([`AccordionError::MissingHeader`](crate::error::AccordionError)).
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            header: None,
            body: body.into(),
            preset_active: false,
        }
    }

    /// Convenience: panel with a fresh header in one call.
    #[must_use]
    pub fn titled(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(body).header(Header::new(title))
    }

    /// Attach the header.
    #[must_use]
    pub fn header(mut self, header: Header) -> Self {
        self.header = Some(header);
        self
    }

    /// Mark this panel active in the source description.
    ///
    /// Mount overrides this: the first panel of each group wins
    /// unconditionally, matching the upstream markup contract.
    #[must_use]
    pub const fn active(mut self, active: bool) -> Self {
        self.preset_active = active;
        self
    }

    /// The panel's header, if attached.
    #[must_use]
    pub const fn header_ref(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    /// Opaque body content. Never manipulated by the controller.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether the source description marked this panel active.
    #[must_use]
    pub const fn preset_active(&self) -> bool {
        self.preset_active
    }
}
