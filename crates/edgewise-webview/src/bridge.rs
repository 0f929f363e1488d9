//! The layout bridge: wires the sync engine, the recovery schedule, the
//! projector, and the platform control behind one host-facing API.
//!
//! Everything runs on the host's UI thread. Platform adapters forward
//! geometry callbacks into `handle_*`, the host polls with the current
//! instant (arming a timer from `next_deadline()`), and the command
//! surface reads the latest snapshot on demand.

use std::time::Instant;

use tracing::{debug, warn};

use edgewise_core::{
    EngineUpdate, KeyboardSignal, LayoutState, PlatformControl, RawInsetEvent, RetrySchedule,
    SyncConfig, SyncEngine,
};

use crate::commands::{KeyboardInfo, SafeAreaInsets};
use crate::projection::Projector;
use crate::surface::ContentSurface;

/// Owns one content surface and keeps it synchronized with platform
/// geometry.
pub struct LayoutBridge<S: ContentSurface, C: PlatformControl> {
    engine: SyncEngine,
    schedule: RetrySchedule,
    projector: Projector,
    surface: Option<S>,
    control: C,
    /// Whether edge-to-edge chrome is currently requested; re-asserted
    /// after keyboard hides because some platforms silently reset it.
    chrome_enabled: bool,
}

impl<S: ContentSurface, C: PlatformControl> LayoutBridge<S, C> {
    pub fn new(config: &SyncConfig, control: C) -> Self {
        Self {
            engine: SyncEngine::new(config),
            schedule: RetrySchedule::new(
                config.attach_retries,
                config.retry_interval(),
                config.nav_retry_delay(),
            ),
            projector: Projector::new(config.bottom_gutter),
            surface: None,
            control,
            chrome_enabled: true,
        }
    }

    /// Attach a content surface: applies chrome settings, projects the
    /// current snapshot once, and arms the re-projection burst that wins
    /// the race against the surface's own initialization.
    pub fn attach_surface(&mut self, surface: S, now: Instant) {
        self.surface = Some(surface);
        self.apply_chrome_settings();
        self.project_current();
        self.schedule.on_attach(now);
        debug!("content surface attached");
    }

    /// Drop the surface. Further projections become silent no-ops.
    pub fn detach_surface(&mut self) -> Option<S> {
        debug!("content surface detached");
        self.surface.take()
    }

    /// The surface finished a navigation; its scripts may have overwritten
    /// the injected properties, so arm the recovery retries.
    pub fn navigation_finished(&mut self, now: Instant) {
        self.schedule.on_navigation_finished(now);
    }

    /// Forward a raw window-inset change from the platform adapter.
    pub fn handle_insets(&mut self, event: RawInsetEvent) {
        if let Some(state) = self.engine.handle_insets(event) {
            self.project(&state);
        }
    }

    /// Forward a raw keyboard lifecycle signal from the platform adapter.
    pub fn handle_keyboard(&mut self, signal: KeyboardSignal, now: Instant) {
        let update = self.engine.handle_keyboard(signal, now);
        self.apply_update(update);
    }

    /// Commit elapsed deadlines: the keyboard hide debounce and any due
    /// recovery re-projections. Due deadlines that elapsed in the same
    /// poll collapse into one re-projection.
    pub fn poll(&mut self, now: Instant) {
        let update = self.engine.poll(now);
        self.apply_update(update);
        if self.schedule.due(now) > 0 {
            self.project_current();
        }
    }

    /// Earliest instant at which [`poll`](Self::poll) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.engine.next_deadline(), self.schedule.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // ---------------------------------------------------------------
    // Command surface
    // ---------------------------------------------------------------

    /// `getSafeAreaInsets`: the latest insets, zero before any geometry
    /// event has fired.
    pub fn safe_area_insets(&self) -> SafeAreaInsets {
        self.engine.current().insets().into()
    }

    /// `getKeyboardInfo`: the latest keyboard height (rounded for
    /// display) and visibility.
    pub fn keyboard_info(&self) -> KeyboardInfo {
        let keyboard = self.engine.current().keyboard();
        KeyboardInfo {
            keyboard_height: keyboard.height().round(),
            is_visible: keyboard.is_visible(),
        }
    }

    /// `enable`: draw behind system chrome. Idempotent.
    pub fn enable(&mut self) {
        self.chrome_enabled = true;
        self.apply_chrome_settings();
    }

    /// `disable`: stop drawing behind system chrome. Leaves the
    /// observation pipeline running.
    pub fn disable(&mut self) {
        self.chrome_enabled = false;
        self.apply_chrome_settings();
    }

    /// `showKeyboard`: best-effort request; a missing focused input is a
    /// successful no-op.
    pub fn show_keyboard(&mut self) {
        if let Err(e) = self.control.show_keyboard() {
            debug!(error = %e, "show keyboard request dropped");
        }
    }

    /// `hideKeyboard`: best-effort request.
    pub fn hide_keyboard(&mut self) {
        if let Err(e) = self.control.hide_keyboard() {
            debug!(error = %e, "hide keyboard request dropped");
        }
    }

    // ---------------------------------------------------------------

    fn apply_update(&mut self, update: EngineUpdate) {
        if update.reassert_chrome && self.chrome_enabled {
            self.apply_chrome_settings();
        }
        if let Some(state) = update.layout {
            self.project(&state);
        }
    }

    fn apply_chrome_settings(&mut self) {
        if let Err(e) = self.control.set_draws_behind_chrome(self.chrome_enabled) {
            warn!(error = %e, enabled = self.chrome_enabled, "chrome settings not applied");
        }
    }

    fn project(&mut self, state: &LayoutState) {
        if let Some(surface) = &self.surface {
            self.projector.project(surface, state);
        }
    }

    fn project_current(&mut self) {
        let state = self.engine.current();
        self.project(&state);
    }
}
