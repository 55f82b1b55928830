#![forbid(unsafe_code)]

//! Page-level controller: binds headers, mounts groups, routes clicks.
//!
//! Binding happens once, at mount. Every header gets a stable [`HeaderId`]
//! (explicit via [`Header::with_id`](crate::panel::Header), otherwise
//! assigned in document order) and an entry in a routing map from id to
//! `(group, panel)`. Click dispatch is a map lookup; there is no structural
//! search at click time, so a malformed description fails at mount instead
//! of faulting later.

use ahash::AHashMap;

use crate::accordion::Accordion;
use crate::error::{AccordionError, Result};
use crate::event::Handled;
use crate::markup::{aria_expanded, group_to_html};
use crate::panel::HeaderId;
use crate::state::GroupState;

/// Builder for an [`AccordionController`].
///
/// Collects groups and the optional ready hook, then validates and mounts.
#[derive(Default)]
pub struct ControllerBuilder {
    groups: Vec<Accordion>,
    on_ready: Option<Box<dyn FnOnce()>>,
}

impl ControllerBuilder {
    /// Add one accordion group.
    #[must_use]
    pub fn group(mut self, accordion: Accordion) -> Self {
        self.groups.push(accordion);
        self
    }

    /// Register the ready hook, invoked exactly once after mount completes.
    ///
    /// This is the extension point for sibling page scripts (the upstream
    /// page used it to kick off a slider library). Not registering one is
    /// normal.
    #[must_use]
    pub fn on_ready(mut self, hook: impl FnOnce() + 'static) -> Self {
        self.on_ready = Some(Box::new(hook));
        self
    }

    /// Validate the description, bind headers, open the first panel of every
    /// group, and invoke the ready hook if one was registered.
    ///
    /// Explicit header ids must be unique; auto-assigned ids skip over them.
    /// A panel without a header is a mount error.
    pub fn mount(self) -> Result<AccordionController> {
        let mut routes = AHashMap::new();
        let mut ids: Vec<Vec<HeaderId>> = Vec::with_capacity(self.groups.len());
        let mut next_auto = 0u64;

        // Explicit ids are claimed first so auto-assignment cannot collide.
        for (group_idx, accordion) in self.groups.iter().enumerate() {
            for (panel_idx, panel) in accordion.panels().iter().enumerate() {
                let header = panel.header_ref().ok_or(AccordionError::MissingHeader {
                    group: group_idx,
                    panel: panel_idx,
                })?;
                if let Some(id) = header.id()
                    && routes.insert(id, (group_idx, panel_idx)).is_some()
                {
                    return Err(AccordionError::DuplicateHeader { id });
                }
            }
        }
        for (group_idx, accordion) in self.groups.iter().enumerate() {
            let mut group_ids = Vec::with_capacity(accordion.panels().len());
            for (panel_idx, panel) in accordion.panels().iter().enumerate() {
                let header = panel.header_ref().ok_or(AccordionError::MissingHeader {
                    group: group_idx,
                    panel: panel_idx,
                })?;
                let id = match header.id() {
                    Some(id) => id,
                    None => {
                        while routes.contains_key(&HeaderId(next_auto)) {
                            next_auto += 1;
                        }
                        let id = HeaderId(next_auto);
                        routes.insert(id, (group_idx, panel_idx));
                        next_auto += 1;
                        id
                    }
                };
                group_ids.push(id);
            }
            ids.push(group_ids);
        }

        let mut states: Vec<GroupState> = self
            .groups
            .iter()
            .map(|accordion| {
                let mut state = GroupState::new(accordion.panels().len());
                for (panel_idx, panel) in accordion.panels().iter().enumerate() {
                    if panel.preset_active() {
                        state.preset(panel_idx);
                    }
                }
                state
            })
            .collect();

        // Default-open: first panel wins, regardless of pre-set markers.
        for state in &mut states {
            state.open_first();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "accordion.mount",
            groups = self.groups.len(),
            headers = routes.len()
        );

        if let Some(hook) = self.on_ready {
            hook();
        }

        Ok(AccordionController {
            groups: self.groups,
            states,
            routes,
            ids,
        })
    }
}

/// A mounted set of accordion groups.
///
/// Holds explicit open/closed state per group; render output is derived from
/// it, never the other way around.
#[derive(Debug)]
pub struct AccordionController {
    groups: Vec<Accordion>,
    states: Vec<GroupState>,
    routes: AHashMap<HeaderId, (usize, usize)>,
    ids: Vec<Vec<HeaderId>>,
}

impl AccordionController {
    /// Start describing a controller.
    #[must_use]
    pub fn builder() -> ControllerBuilder {
        ControllerBuilder::default()
    }

    /// Route one header click.
    ///
    /// Unknown ids return [`Handled::Ignored`] and leave all state untouched.
    /// A consumed click means the host should stop propagation and suppress
    /// the default action for the originating event.
    pub fn click(&mut self, header: HeaderId) -> Handled {
        let Some(&(group, panel)) = self.routes.get(&header) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "accordion.click_unbound", header = header.0);
            return Handled::Ignored;
        };
        match self.states[group].click(panel) {
            Some(now_open) => Handled::Consumed {
                header,
                group,
                panel,
                now_open,
            },
            None => Handled::Ignored,
        }
    }

    /// Force a panel's active state directly, bypassing toggle logic.
    ///
    /// `panel = None` is a safe no-op. Out-of-range groups are ignored.
    pub fn set_panel_active(&mut self, group: usize, panel: Option<usize>, active: bool) {
        if let Some(state) = self.states.get_mut(group) {
            state.set_panel_active(panel, active);
        }
    }

    /// Number of groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// State of one group.
    #[must_use]
    pub fn state(&self, group: usize) -> Option<&GroupState> {
        self.states.get(group)
    }

    /// Whether `panel` in `group` is open.
    #[must_use]
    pub fn is_open(&self, group: usize, panel: usize) -> bool {
        self.states
            .get(group)
            .is_some_and(|state| state.is_open(panel))
    }

    /// The id bound to a header at mount.
    #[must_use]
    pub fn header_id(&self, group: usize, panel: usize) -> Option<HeaderId> {
        self.ids.get(group)?.get(panel).copied()
    }

    /// `aria-expanded` value for a panel's header wrapper.
    #[must_use]
    pub fn aria_expanded(&self, group: usize, panel: usize) -> &'static str {
        self.states
            .get(group)
            .map_or("false", |state| aria_expanded(state.markers(panel)))
    }

    /// Class list currently on a panel element.
    #[must_use]
    pub fn panel_classes(&self, group: usize, panel: usize) -> Vec<&str> {
        match (self.groups.get(group), self.states.get(group)) {
            (Some(accordion), Some(state)) => {
                accordion.classes().panel_classes(state.markers(panel))
            }
            _ => Vec::new(),
        }
    }

    /// Class list currently on a header element.
    #[must_use]
    pub fn header_classes(&self, group: usize, panel: usize) -> Vec<&str> {
        match (self.groups.get(group), self.states.get(group)) {
            (Some(accordion), Some(state)) => {
                accordion.classes().header_classes(state.markers(panel))
            }
            _ => Vec::new(),
        }
    }

    /// HTML snapshot of one group.
    #[must_use]
    pub fn to_html(&self, group: usize) -> Option<String> {
        let accordion = self.groups.get(group)?;
        let state = self.states.get(group)?;
        Some(group_to_html(accordion, state))
    }
}
