//! Geometry source contract: the raw events a platform adapter delivers
//! and the best-effort mutators the command surface calls back into.
//!
//! Adapters do no filtering or debouncing — they forward platform
//! callbacks as-is, converting device pixels to logical units through the
//! [`ScaleFactor`] captured at subscription time. All semantic work
//! (dedup, debounce, change suppression) happens downstream in the
//! tracker and aggregator.

use serde::Serialize;
use tracing::warn;

use crate::error::PlatformError;
use crate::types::Insets;

/// Fixed density factor for converting device pixels to logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Wrap a platform-reported scale. Non-positive values fall back to
    /// 1.0 rather than poisoning every conversion downstream.
    pub fn new(scale: f64) -> Self {
        if scale > 0.0 {
            Self(scale)
        } else {
            warn!(scale, "invalid scale factor, falling back to 1.0");
            Self(1.0)
        }
    }

    pub fn to_logical(&self, device_px: f64) -> f64 {
        device_px / self.0
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(1.0)
    }
}

/// On-screen position of the host window, used to correct keyboard
/// heights when the window does not span the full screen (split-screen /
/// multi-window staging).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowMetrics {
    /// Window height as rendered on screen, logical units.
    pub window_height: f64,
    /// Vertical origin of the window on the screen, logical units.
    pub window_origin_y: f64,
    /// Full screen height, logical units.
    pub screen_height: f64,
}

/// A raw window-inset-changed event as bundled by the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawInsetEvent {
    /// System-bar / safe-area insets, logical units.
    pub insets: Insets,
    /// Keyboard occlusion as bundled by the platform with the inset
    /// change. The transition tracker is authoritative for visibility;
    /// these fields are carried through unfiltered per the source
    /// contract.
    pub ime_visible: bool,
    pub ime_height: f64,
}

/// Raw keyboard lifecycle notifications, delivered by platforms on a
/// separate channel from inset changes and with their own timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyboardSignal {
    /// Keyboard animation is about to start; carries the reported end
    /// frame height and, where available, the window's on-screen metrics
    /// for staged-window correction.
    WillShow {
        frame_height: f64,
        metrics: Option<WindowMetrics>,
    },
    /// Show animation finished.
    DidShow,
    /// Hide animation is about to start.
    WillHide,
    /// Hide animation finished.
    DidHide,
}

/// Imperative platform operations invoked outside the recurring pipeline:
/// the idempotent "draw behind system chrome" toggle and best-effort
/// input-method requests.
pub trait PlatformControl {
    /// Toggle whether window content draws behind system bars. Idempotent;
    /// re-invoked after keyboard hides because some platforms silently
    /// reset it.
    fn set_draws_behind_chrome(&mut self, enabled: bool) -> Result<(), PlatformError>;

    /// Ask the input-method layer to show the keyboard for the currently
    /// focused input, if any.
    fn show_keyboard(&mut self) -> Result<(), PlatformError>;

    /// Ask the input-method layer to dismiss the keyboard.
    fn hide_keyboard(&mut self) -> Result<(), PlatformError>;
}

/// Control backend for hosts with no system chrome or programmatic
/// keyboard (desktop, tests). Every operation succeeds as a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopControl;

impl PlatformControl for NoopControl {
    fn set_draws_behind_chrome(&mut self, _enabled: bool) -> Result<(), PlatformError> {
        Ok(())
    }

    fn show_keyboard(&mut self) -> Result<(), PlatformError> {
        Ok(())
    }

    fn hide_keyboard(&mut self) -> Result<(), PlatformError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_factor_converts_to_logical() {
        let scale = ScaleFactor::new(2.0);
        assert_eq!(scale.to_logical(94.0), 47.0);
        assert_eq!(scale.to_logical(0.0), 0.0);
    }

    #[test]
    fn scale_factor_rejects_non_positive() {
        assert_eq!(ScaleFactor::new(0.0).get(), 1.0);
        assert_eq!(ScaleFactor::new(-2.5).get(), 1.0);
        assert_eq!(ScaleFactor::default().get(), 1.0);
    }

    #[test]
    fn noop_control_always_succeeds() {
        let mut control = NoopControl;
        assert!(control.set_draws_behind_chrome(true).is_ok());
        assert!(control.set_draws_behind_chrome(false).is_ok());
        assert!(control.show_keyboard().is_ok());
        assert!(control.hide_keyboard().is_ok());
    }
}
