#![forbid(unsafe_code)]

//! Per-group open/closed state.
//!
//! The source of truth is [`GroupState::open`], an explicit index with `None`
//! meaning "all closed". Marker flags are a projection of that index kept in
//! sync by [`GroupState::set_panel_active`]; they exist so the markup layer
//! can diff class lists without re-deriving anything, and are never read back
//! to recover logical state.

use bitflags::bitflags;
#[cfg(feature = "state-persistence")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// Marker flags mirrored onto a panel's rendered markup.
    ///
    /// `PANEL` and `ITEM` are two independently named classes on the panel
    /// element that must always track the same boolean (the upstream CSS
    /// framework's dual-class convention). `HEADER` is the header's own
    /// active class; `EXPANDED` is the `aria-expanded="true"` attribute on
    /// the header wrapper.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct ActiveMarkers: u8 {
        const PANEL = 1 << 0;
        const ITEM = 1 << 1;
        const HEADER = 1 << 2;
        const EXPANDED = 1 << 3;
    }
}

impl ActiveMarkers {
    /// The full marker set carried by an open panel.
    pub const ACTIVE: Self = Self::all();
}

#[cfg(feature = "state-persistence")]
impl Serialize for ActiveMarkers {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

#[cfg(feature = "state-persistence")]
impl<'de> Deserialize<'de> for ActiveMarkers {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

/// State for one accordion group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "state-persistence", derive(Serialize, Deserialize))]
pub struct GroupState {
    /// Index of the open panel, `None` when all panels are closed.
    open: Option<usize>,
    markers: Vec<ActiveMarkers>,
}

impl GroupState {
    /// State for a group of `panel_count` panels, all closed.
    #[must_use]
    pub fn new(panel_count: usize) -> Self {
        Self {
            open: None,
            markers: vec![ActiveMarkers::empty(); panel_count],
        }
    }

    /// Seed a pre-set marker from the source description.
    ///
    /// Mount wipes these when it opens the first panel; they only exist so
    /// the override is observable.
    pub(crate) fn preset(&mut self, panel: usize) {
        if let Some(m) = self.markers.get_mut(panel) {
            *m = ActiveMarkers::ACTIVE;
            self.open = Some(panel);
        }
    }

    /// Number of panels tracked.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.markers.len()
    }

    /// Index of the open panel, if any.
    #[must_use]
    pub const fn open(&self) -> Option<usize> {
        self.open
    }

    /// Whether every panel is closed.
    #[must_use]
    pub const fn is_all_closed(&self) -> bool {
        self.open.is_none()
    }

    /// Whether `panel` is open.
    #[must_use]
    pub fn is_open(&self, panel: usize) -> bool {
        self.open == Some(panel)
    }

    /// Marker flags for `panel` (empty for out-of-range indices).
    #[must_use]
    pub fn markers(&self, panel: usize) -> ActiveMarkers {
        self.markers.get(panel).copied().unwrap_or_default()
    }

    /// Set or clear a panel's active markers.
    ///
    /// `panel = None` is a safe no-op, covering "no panel is currently open"
    /// without a special case at the call site. All four markers move
    /// together; the dual panel classes cannot drift apart.
    pub fn set_panel_active(&mut self, panel: Option<usize>, active: bool) {
        let Some(idx) = panel else { return };
        let Some(m) = self.markers.get_mut(idx) else {
            return;
        };
        *m = if active {
            ActiveMarkers::ACTIVE
        } else {
            ActiveMarkers::empty()
        };
        if active {
            self.open = Some(idx);
        } else if self.open == Some(idx) {
            self.open = None;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "accordion.set_active", panel = idx, active);
    }

    /// Open the first panel, overriding any pre-set markers.
    ///
    /// No-op for empty groups. This is the mount-time default: last write
    /// wins, first panel wins.
    pub fn open_first(&mut self) {
        if self.markers.is_empty() {
            return;
        }
        for m in &mut self.markers {
            *m = ActiveMarkers::empty();
        }
        self.open = None;
        self.set_panel_active(Some(0), true);
    }

    /// Apply one header click.
    ///
    /// Closes whatever is open in the group, then toggles the clicked panel:
    /// re-clicking the open panel leaves the group all-closed, clicking a
    /// closed panel switches to it in the same operation. Returns whether
    /// the clicked panel is now open, or `None` for out-of-range indices.
    pub fn click(&mut self, panel: usize) -> Option<bool> {
        if panel >= self.markers.len() {
            return None;
        }
        let was_active = self.markers[panel].contains(ActiveMarkers::HEADER);
        self.set_panel_active(self.open, false);
        self.set_panel_active(Some(panel), !was_active);
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "accordion.click", panel, now_open = !was_active);
        Some(!was_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_first_overrides_preset() {
        let mut state = GroupState::new(3);
        state.preset(2);
        assert_eq!(state.open(), Some(2));
        state.open_first();
        assert_eq!(state.open(), Some(0));
        assert_eq!(state.markers(0), ActiveMarkers::ACTIVE);
        assert_eq!(state.markers(2), ActiveMarkers::empty());
    }

    #[test]
    fn open_first_empty_group_is_noop() {
        let mut state = GroupState::new(0);
        state.open_first();
        assert!(state.is_all_closed());
    }

    #[test]
    fn set_panel_active_none_is_noop() {
        let mut state = GroupState::new(2);
        state.open_first();
        let before = state.clone();
        state.set_panel_active(None, false);
        state.set_panel_active(None, true);
        assert_eq!(state, before);
    }

    #[test]
    fn click_open_panel_closes_group() {
        let mut state = GroupState::new(2);
        state.open_first();
        assert_eq!(state.click(0), Some(false));
        assert!(state.is_all_closed());
        assert_eq!(state.markers(0), ActiveMarkers::empty());
    }

    #[test]
    fn click_switches_in_one_operation() {
        let mut state = GroupState::new(3);
        state.open_first();
        assert_eq!(state.click(2), Some(true));
        assert_eq!(state.open(), Some(2));
        assert!(!state.is_open(0));
    }

    #[test]
    fn click_out_of_range_ignored() {
        let mut state = GroupState::new(2);
        state.open_first();
        assert_eq!(state.click(5), None);
        assert_eq!(state.open(), Some(0));
    }

    #[test]
    fn reclick_restores_prior_active_set() {
        let mut state = GroupState::new(3);
        state.open_first();
        state.click(1);
        let after_first = state.clone();
        state.click(1);
        assert!(state.is_all_closed());
        state.click(1);
        assert_eq!(state, after_first);
    }

    #[test]
    fn dual_panel_classes_never_drift() {
        let mut state = GroupState::new(4);
        state.open_first();
        for panel in [3, 1, 1, 0, 2, 2] {
            state.click(panel);
            for idx in 0..state.panel_count() {
                let m = state.markers(idx);
                assert_eq!(
                    m.contains(ActiveMarkers::PANEL),
                    m.contains(ActiveMarkers::ITEM)
                );
                assert_eq!(
                    m.contains(ActiveMarkers::PANEL),
                    m.contains(ActiveMarkers::HEADER)
                );
            }
        }
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_at_most_one_panel_open(
            panel_count in 1usize..8,
            clicks in prop::collection::vec(0usize..8, 0..32),
        ) {
            let mut state = GroupState::new(panel_count);
            state.open_first();
            for click in clicks {
                state.click(click);
                let open_count = (0..panel_count)
                    .filter(|&idx| state.markers(idx) == ActiveMarkers::ACTIVE)
                    .count();
                prop_assert!(open_count <= 1);
                match state.open() {
                    Some(idx) => prop_assert_eq!(state.markers(idx), ActiveMarkers::ACTIVE),
                    None => prop_assert_eq!(open_count, 0),
                }
            }
        }

        #[test]
        fn prop_double_click_is_identity_on_open_set(
            panel_count in 1usize..8,
            warmup in prop::collection::vec(0usize..8, 0..8),
            target in 0usize..8,
        ) {
            let mut state = GroupState::new(panel_count);
            state.open_first();
            for click in warmup {
                state.click(click);
            }
            let target = target % panel_count;
            let before_open = state.open();
            state.click(target);
            state.click(target);
            // Open-set membership of `target` matches what it was before the
            // pair of clicks; the rest of the group was closed by the first.
            prop_assert_eq!(state.is_open(target), before_open == Some(target));
        }
    }

    #[cfg(feature = "state-persistence")]
    #[test]
    fn state_round_trips_through_serde() {
        let mut state = GroupState::new(3);
        state.open_first();
        state.click(2);
        let json = serde_json::to_string(&state).unwrap();
        let back: GroupState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
