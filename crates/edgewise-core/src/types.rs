//! Core value types: insets, keyboard state, and the layout snapshot.

use serde::{Deserialize, Serialize};

/// Distances from the four window edges to the start of the safe content
/// area, in logical units. Compared structurally for change suppression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    /// Build insets, clamping each edge to be non-negative.
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top: top.max(0.0),
            right: right.max(0.0),
            bottom: bottom.max(0.0),
            left: left.max(0.0),
        }
    }
}

/// Coarse phase of the on-screen keyboard transition.
///
/// Fine-grained animation progress callbacks are collapsed to these four
/// boundary states; only boundary transitions trigger projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardPhase {
    Hidden,
    Appearing,
    Visible,
    Disappearing,
}

/// Keyboard height and visibility snapshot.
///
/// Constructed only through the phase constructors, which maintain two
/// invariants: `visible` holds exactly when the phase is `Appearing` or
/// `Visible`, and the height is pinned to zero while `Disappearing` or
/// `Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardState {
    height: f64,
    visible: bool,
    phase: KeyboardPhase,
}

impl KeyboardState {
    pub fn hidden() -> Self {
        Self {
            height: 0.0,
            visible: false,
            phase: KeyboardPhase::Hidden,
        }
    }

    pub fn appearing(height: f64) -> Self {
        Self {
            height: height.max(0.0),
            visible: true,
            phase: KeyboardPhase::Appearing,
        }
    }

    pub fn shown(height: f64) -> Self {
        Self {
            height: height.max(0.0),
            visible: true,
            phase: KeyboardPhase::Visible,
        }
    }

    pub fn disappearing() -> Self {
        Self {
            height: 0.0,
            visible: false,
            phase: KeyboardPhase::Disappearing,
        }
    }

    /// Keyboard height in logical units. Authoritative only while
    /// `Appearing` or `Visible`; zero otherwise.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn phase(&self) -> KeyboardPhase {
        self.phase
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::hidden()
    }
}

/// One immutable snapshot of everything the content surface needs to lay
/// itself out: system-bar insets, keyboard state, and the platform's
/// minimum bottom reserve (home-indicator area).
///
/// This is the unit of change detection and the unit handed to the
/// projection engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutState {
    insets: Insets,
    keyboard: KeyboardState,
    min_bottom_reserve: f64,
}

impl LayoutState {
    pub fn new(insets: Insets, keyboard: KeyboardState, min_bottom_reserve: f64) -> Self {
        Self {
            insets,
            keyboard,
            min_bottom_reserve: min_bottom_reserve.max(0.0),
        }
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn keyboard(&self) -> KeyboardState {
        self.keyboard
    }

    pub fn min_bottom_reserve(&self) -> f64 {
        self.min_bottom_reserve
    }

    /// Bottom distance content should treat as occluded.
    ///
    /// Keyboard hidden: `max(insets.bottom, min_bottom_reserve)`.
    /// Keyboard visible: the raw bottom inset — the keyboard already covers
    /// the region the reserve protects, and its height is reported
    /// separately so content reserves space above the keyboard instead of
    /// double-reserving.
    pub fn effective_bottom(&self) -> f64 {
        if self.keyboard.is_visible() {
            self.insets.bottom
        } else {
            self.insets.bottom.max(self.min_bottom_reserve)
        }
    }

    /// Convenience padding value: effective bottom plus a fixed gutter.
    pub fn content_bottom_padding(&self, gutter: f64) -> f64 {
        self.effective_bottom() + gutter
    }
}
