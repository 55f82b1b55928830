#![forbid(unsafe_code)]

//! Class-name configuration and the HTML snapshot renderer.
//!
//! The controller never touches a live DOM; it projects group state onto
//! class lists and `aria-expanded` attributes. [`ClassNames`] carries the
//! names, defaulting to the Vuetify expansion-panel convention the upstream
//! markup uses, including its dual active class on the panel element.

use std::fmt::Write as _;

use v_htmlescape::escape;

use crate::accordion::Accordion;
use crate::state::{ActiveMarkers, GroupState};

/// CSS class names used on the markup surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    /// Group container class.
    pub root: String,
    /// Base panel class.
    pub panel: String,
    /// First active marker on the panel element.
    pub panel_active: String,
    /// Second active marker on the panel element, kept in sync with the
    /// first (dual-class convention).
    pub item_active: String,
    /// Base header class.
    pub header: String,
    /// Active marker on the header element.
    pub header_active: String,
    /// Class on the body content element.
    pub content: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            root: "v-expansion-panels".into(),
            panel: "v-expansion-panel".into(),
            panel_active: "v-expansion-panel--active".into(),
            item_active: "v-item--active".into(),
            header: "v-expansion-panel-header".into(),
            header_active: "v-expansion-panel-header--active".into(),
            content: "v-expansion-panel-content".into(),
        }
    }
}

impl ClassNames {
    /// Class list for a panel element with the given markers.
    #[must_use]
    pub fn panel_classes(&self, markers: ActiveMarkers) -> Vec<&str> {
        let mut classes = vec![self.panel.as_str()];
        if markers.contains(ActiveMarkers::PANEL) {
            classes.push(self.panel_active.as_str());
        }
        if markers.contains(ActiveMarkers::ITEM) {
            classes.push(self.item_active.as_str());
        }
        classes
    }

    /// Class list for a header element with the given markers.
    #[must_use]
    pub fn header_classes(&self, markers: ActiveMarkers) -> Vec<&str> {
        let mut classes = vec![self.header.as_str()];
        if markers.contains(ActiveMarkers::HEADER) {
            classes.push(self.header_active.as_str());
        }
        classes
    }
}

/// `aria-expanded` attribute value for the given markers.
#[must_use]
pub fn aria_expanded(markers: ActiveMarkers) -> &'static str {
    if markers.contains(ActiveMarkers::EXPANDED) {
        "true"
    } else {
        "false"
    }
}

/// Render one group to a deterministic HTML snapshot.
///
/// Structure matches the upstream markup contract: each panel wraps its
/// header `<button>` in an element carrying `aria-expanded`, followed by the
/// body content. Labels and bodies are escaped.
#[must_use]
pub fn group_to_html(accordion: &Accordion, state: &GroupState) -> String {
    let names = accordion.classes();
    let mut out = String::new();
    let _ = writeln!(out, "<div class=\"{}\">", names.root);
    for (idx, panel) in accordion.panels().iter().enumerate() {
        let markers = state.markers(idx);
        let _ = writeln!(
            out,
            "  <div class=\"{}\">",
            names.panel_classes(markers).join(" ")
        );
        let _ = writeln!(out, "    <div aria-expanded=\"{}\">", aria_expanded(markers));
        let label = panel
            .header_ref()
            .map(|header| header.label())
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "      <button class=\"{}\">{}</button>",
            names.header_classes(markers).join(" "),
            escape(label)
        );
        let _ = writeln!(out, "    </div>");
        let _ = writeln!(
            out,
            "    <div class=\"{}\">{}</div>",
            names.content,
            escape(panel.body())
        );
        let _ = writeln!(out, "  </div>");
    }
    out.push_str("</div>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Panel;

    #[test]
    fn default_names_follow_dual_class_convention() {
        let names = ClassNames::default();
        assert_ne!(names.panel_active, names.item_active);
        let open = names.panel_classes(ActiveMarkers::ACTIVE);
        assert!(open.contains(&"v-expansion-panel--active"));
        assert!(open.contains(&"v-item--active"));
        let closed = names.panel_classes(ActiveMarkers::empty());
        assert_eq!(closed, vec!["v-expansion-panel"]);
    }

    #[test]
    fn aria_reflects_expanded_marker() {
        assert_eq!(aria_expanded(ActiveMarkers::ACTIVE), "true");
        assert_eq!(aria_expanded(ActiveMarkers::empty()), "false");
    }

    #[test]
    fn html_escapes_untrusted_content() {
        let accordion = Accordion::new(vec![Panel::titled("<b>", "a & b")]);
        let state = GroupState::new(1);
        let html = group_to_html(&accordion, &state);
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn html_marks_open_panel_only() {
        let accordion = Accordion::new(vec![
            Panel::titled("A", "one"),
            Panel::titled("B", "two"),
        ]);
        let mut state = GroupState::new(2);
        state.open_first();
        let html = group_to_html(&accordion, &state);
        assert_eq!(html.matches("aria-expanded=\"true\"").count(), 1);
        assert_eq!(html.matches("aria-expanded=\"false\"").count(), 1);
        assert_eq!(html.matches("v-expansion-panel--active").count(), 1);
    }
}
