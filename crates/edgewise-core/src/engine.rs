//! Sync engine: tracker + aggregator behind one event-driven API.
//!
//! The engine owns the keyboard transition tracker and the inset
//! aggregator and runs entirely on the host's UI thread — platform
//! callbacks feed events in, and timed transitions are committed by
//! polling with the current instant.

use std::time::Instant;

use crate::config::SyncConfig;
use crate::keyboard::KeyboardTracker;
use crate::layout::LayoutAggregator;
use crate::source::{KeyboardSignal, RawInsetEvent};
use crate::types::{KeyboardPhase, LayoutState};

/// Outcome of feeding one event or poll into the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineUpdate {
    /// Snapshot to project, when the layout actually changed.
    pub layout: Option<LayoutState>,
    /// The keyboard finished hiding; the host should re-apply its chrome
    /// settings because some platforms silently reset them.
    pub reassert_chrome: bool,
}

impl EngineUpdate {
    fn none() -> Self {
        Self {
            layout: None,
            reassert_chrome: false,
        }
    }
}

pub struct SyncEngine {
    tracker: KeyboardTracker,
    aggregator: LayoutAggregator,
}

impl SyncEngine {
    pub fn new(config: &SyncConfig) -> Self {
        Self {
            tracker: KeyboardTracker::new(config.hide_debounce()),
            aggregator: LayoutAggregator::new(config.min_bottom_reserve),
        }
    }

    /// The current snapshot, zero/default before any geometry arrived.
    pub fn current(&self) -> LayoutState {
        self.aggregator.current()
    }

    /// Feed a raw inset change. The bundled IME fields are ignored here;
    /// the transition tracker is authoritative for keyboard visibility.
    pub fn handle_insets(&mut self, event: RawInsetEvent) -> Option<LayoutState> {
        self.aggregator.apply_insets(event.insets)
    }

    /// Feed a raw keyboard lifecycle signal.
    pub fn handle_keyboard(&mut self, signal: KeyboardSignal, now: Instant) -> EngineUpdate {
        match self.tracker.handle(signal, now) {
            Some(keyboard) => EngineUpdate {
                layout: self.aggregator.apply_keyboard(keyboard),
                reassert_chrome: keyboard.phase() == KeyboardPhase::Hidden,
            },
            None => EngineUpdate::none(),
        }
    }

    /// Commit any elapsed timed transition (the hide debounce).
    pub fn poll(&mut self, now: Instant) -> EngineUpdate {
        match self.tracker.poll(now) {
            Some(keyboard) => EngineUpdate {
                layout: self.aggregator.apply_keyboard(keyboard),
                reassert_chrome: keyboard.phase() == KeyboardPhase::Hidden,
            },
            None => EngineUpdate::none(),
        }
    }

    /// Next instant at which [`poll`](Self::poll) may produce a transition.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tracker.next_deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Insets;

    fn inset_event(top: f64, bottom: f64) -> RawInsetEvent {
        RawInsetEvent {
            insets: Insets::new(top, 0.0, bottom, 0.0),
            ime_visible: false,
            ime_height: 0.0,
        }
    }

    fn will_show(height: f64) -> KeyboardSignal {
        KeyboardSignal::WillShow {
            frame_height: height,
            metrics: None,
        }
    }

    #[test]
    fn inset_event_flows_through_to_snapshot() {
        let mut engine = SyncEngine::new(&SyncConfig::default());
        let state = engine.handle_insets(inset_event(47.0, 34.0)).unwrap();
        assert_eq!(state.insets().top, 47.0);
        assert_eq!(state.effective_bottom(), 34.0);

        // Redundant platform callback is suppressed.
        assert!(engine.handle_insets(inset_event(47.0, 34.0)).is_none());
    }

    #[test]
    fn keyboard_show_produces_keyboard_aware_snapshot() {
        let mut engine = SyncEngine::new(&SyncConfig::default());
        let now = Instant::now();
        engine.handle_insets(inset_event(47.0, 0.0));

        let update = engine.handle_keyboard(will_show(291.0), now);
        let state = update.layout.unwrap();
        assert!(state.keyboard().is_visible());
        assert_eq!(state.keyboard().height(), 291.0);
        // Keyboard visible: raw inset, not the reserve.
        assert_eq!(state.effective_bottom(), 0.0);
        assert!(!update.reassert_chrome);
    }

    #[test]
    fn hide_commit_requests_chrome_reassert() {
        let config = SyncConfig::default();
        let mut engine = SyncEngine::new(&config);
        let now = Instant::now();

        engine.handle_keyboard(will_show(291.0), now);
        engine.handle_keyboard(KeyboardSignal::DidShow, now);
        let update = engine.handle_keyboard(KeyboardSignal::WillHide, now);
        assert!(update.layout.is_some());
        assert!(!update.reassert_chrome);

        let deadline = engine.next_deadline().unwrap();
        let update = engine.poll(deadline);
        assert!(update.reassert_chrome);
        assert_eq!(
            update.layout.unwrap().keyboard().phase(),
            KeyboardPhase::Hidden
        );
    }

    #[test]
    fn ignored_signal_produces_empty_update() {
        let mut engine = SyncEngine::new(&SyncConfig::default());
        let update = engine.handle_keyboard(KeyboardSignal::DidShow, Instant::now());
        assert_eq!(update, EngineUpdate::none());
    }

    #[test]
    fn bundled_ime_fields_do_not_affect_visibility() {
        let mut engine = SyncEngine::new(&SyncConfig::default());
        let event = RawInsetEvent {
            insets: Insets::new(47.0, 0.0, 34.0, 0.0),
            ime_visible: true,
            ime_height: 300.0,
        };
        let state = engine.handle_insets(event).unwrap();
        assert!(!state.keyboard().is_visible());
    }
}
