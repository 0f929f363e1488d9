//! Wire shapes of the invocation-style command surface.
//!
//! Every command resolves successfully even under degraded platform
//! conditions: missing geometry reads back as the zero/default state and
//! platform failures are swallowed after logging.

use serde::{Deserialize, Serialize};

use edgewise_core::Insets;

/// Response of `getSafeAreaInsets`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeAreaInsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl From<Insets> for SafeAreaInsets {
    fn from(insets: Insets) -> Self {
        Self {
            top: insets.top,
            right: insets.right,
            bottom: insets.bottom,
            left: insets.left,
        }
    }
}

/// Response of `getKeyboardInfo`. The height is rounded for display, in
/// logical units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardInfo {
    pub keyboard_height: f64,
    pub is_visible: bool,
}
