//! Inset aggregator: merges raw insets and keyboard state into one
//! change-detected [`LayoutState`] snapshot.
//!
//! Equality covers the full snapshot, not just insets, so a keyboard-only
//! transition still emits even when the system bars did not move. An
//! update that reproduces the last emitted snapshot is dropped, keeping
//! projection idempotent under redundant platform callbacks.

use tracing::debug;

use crate::types::{Insets, KeyboardState, LayoutState};

pub struct LayoutAggregator {
    insets: Insets,
    keyboard: KeyboardState,
    min_bottom_reserve: f64,
    last_emitted: Option<LayoutState>,
}

impl LayoutAggregator {
    pub fn new(min_bottom_reserve: f64) -> Self {
        Self {
            insets: Insets::default(),
            keyboard: KeyboardState::hidden(),
            min_bottom_reserve,
            last_emitted: None,
        }
    }

    /// The current snapshot. Always available — before any geometry event
    /// has fired this is the zero/default state.
    pub fn current(&self) -> LayoutState {
        LayoutState::new(self.insets, self.keyboard, self.min_bottom_reserve)
    }

    /// Record a raw inset change. Returns the new snapshot when it differs
    /// from the last emitted one.
    pub fn apply_insets(&mut self, insets: Insets) -> Option<LayoutState> {
        self.insets = insets;
        self.emit_if_changed()
    }

    /// Record a keyboard transition. Returns the new snapshot when it
    /// differs from the last emitted one.
    pub fn apply_keyboard(&mut self, keyboard: KeyboardState) -> Option<LayoutState> {
        self.keyboard = keyboard;
        self.emit_if_changed()
    }

    fn emit_if_changed(&mut self) -> Option<LayoutState> {
        let snapshot = self.current();
        if self.last_emitted == Some(snapshot) {
            return None;
        }
        debug!(
            top = snapshot.insets().top,
            bottom = snapshot.insets().bottom,
            keyboard_height = snapshot.keyboard().height(),
            keyboard_visible = snapshot.keyboard().is_visible(),
            "layout changed"
        );
        self.last_emitted = Some(snapshot);
        Some(snapshot)
    }
}
