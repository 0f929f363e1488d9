//! Synchronization tunables.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tunables for the inset/keyboard synchronization engine.
///
/// Defaults reproduce the measured platform behavior: a 34-unit bottom
/// reserve (home-indicator area), a 16-unit content gutter, a 10 ms hide
/// debounce, and a 10 x 500 ms re-projection burst with a 100 ms
/// post-navigation retry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Minimum bottom reserve guaranteed while the keyboard is hidden,
    /// logical units.
    pub min_bottom_reserve: f64,
    /// Additive gutter for the derived `--content-bottom-padding` value,
    /// logical units.
    pub bottom_gutter: f64,
    /// Debounce before committing a keyboard hide, so a rapid re-show
    /// (focus hopping between inputs) never flashes the hidden layout.
    pub hide_debounce_ms: u64,
    /// Number of re-projections after a content surface attaches.
    pub attach_retries: u32,
    /// Spacing between attach re-projections.
    pub retry_interval_ms: u64,
    /// Delay of the single quick retry after a navigation completes.
    pub nav_retry_delay_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            min_bottom_reserve: 34.0,
            bottom_gutter: 16.0,
            hide_debounce_ms: 10,
            attach_retries: 10,
            retry_interval_ms: 500,
            nav_retry_delay_ms: 100,
        }
    }
}

impl SyncConfig {
    pub fn hide_debounce(&self) -> Duration {
        Duration::from_millis(self.hide_debounce_ms)
    }

    pub fn retry_interval(&self) -> Duration {
        Duration::from_millis(self.retry_interval_ms)
    }

    pub fn nav_retry_delay(&self) -> Duration {
        Duration::from_millis(self.nav_retry_delay_ms)
    }
}
