//! Keyboard transition tracker.
//!
//! Consumes raw [`KeyboardSignal`]s and produces a four-phase state
//! machine (`Hidden -> Appearing -> Visible -> Disappearing -> Hidden`)
//! with a stable height, absorbing duplicate and out-of-order native
//! callbacks.
//!
//! The `Disappearing -> Hidden` commit is debounced: a `WillShow` that
//! arrives inside the debounce window (rapid focus change between inputs
//! switching keyboard types) cancels the pending commit and re-enters
//! `Appearing` directly, so content never flashes to the hidden layout.
//!
//! Timed behavior is deadline-driven: the host passes `Instant::now()`
//! into [`KeyboardTracker::handle`] and commits elapsed deadlines through
//! [`KeyboardTracker::poll`], arming a wakeup from
//! [`KeyboardTracker::next_deadline`].

use std::time::{Duration, Instant};

use tracing::debug;

use crate::source::{KeyboardSignal, WindowMetrics};
use crate::types::{KeyboardPhase, KeyboardState};

/// Tracks keyboard lifecycle callbacks into boundary-transition snapshots.
pub struct KeyboardTracker {
    state: KeyboardState,
    hide_debounce: Duration,
    /// Deadline for committing `Disappearing -> Hidden`; cancelled by a
    /// superseding `WillShow`.
    pending_hide_at: Option<Instant>,
    /// Staged-window corrected height, cached per window configuration
    /// until `DidHide` resets it.
    corrected: Option<(WindowMetrics, f64)>,
}

impl KeyboardTracker {
    pub fn new(hide_debounce: Duration) -> Self {
        Self {
            state: KeyboardState::hidden(),
            hide_debounce,
            pending_hide_at: None,
            corrected: None,
        }
    }

    /// The current keyboard snapshot.
    pub fn state(&self) -> KeyboardState {
        self.state
    }

    /// Feed one raw signal. Returns a snapshot when a boundary transition
    /// occurred; duplicates and out-of-order signals yield `None`.
    pub fn handle(&mut self, signal: KeyboardSignal, now: Instant) -> Option<KeyboardState> {
        match signal {
            KeyboardSignal::WillShow {
                frame_height,
                metrics,
            } => {
                // A show supersedes any pending hidden commit.
                self.pending_hide_at = None;
                let height = self.correct_height(frame_height, metrics);
                self.transition(KeyboardState::appearing(height))
            }
            KeyboardSignal::DidShow => {
                if self.state.phase() == KeyboardPhase::Appearing {
                    self.transition(KeyboardState::shown(self.state.height()))
                } else {
                    // Redundant or out-of-order DidShow.
                    None
                }
            }
            KeyboardSignal::WillHide => self.begin_hide(now),
            KeyboardSignal::DidHide => {
                // The window configuration the correction was computed for
                // no longer applies once the keyboard is fully gone.
                self.corrected = None;
                // Tolerate a missed WillHide so the machine cannot wedge
                // in a visible phase.
                self.begin_hide(now)
            }
        }
    }

    /// Commit an elapsed hide debounce. Returns the `Hidden` snapshot when
    /// the deadline passed without a superseding show.
    pub fn poll(&mut self, now: Instant) -> Option<KeyboardState> {
        let deadline = self.pending_hide_at?;
        if now < deadline || self.state.phase() != KeyboardPhase::Disappearing {
            return None;
        }
        self.pending_hide_at = None;
        self.transition(KeyboardState::hidden())
    }

    /// Next instant at which [`poll`](Self::poll) may produce a transition.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_hide_at
    }

    fn begin_hide(&mut self, now: Instant) -> Option<KeyboardState> {
        match self.state.phase() {
            KeyboardPhase::Appearing | KeyboardPhase::Visible => {
                self.pending_hide_at = Some(now + self.hide_debounce);
                self.transition(KeyboardState::disappearing())
            }
            // Already hidden or already on the way out.
            KeyboardPhase::Hidden | KeyboardPhase::Disappearing => None,
        }
    }

    fn transition(&mut self, next: KeyboardState) -> Option<KeyboardState> {
        if next == self.state {
            return None;
        }
        debug!(
            from = ?self.state.phase(),
            to = ?next.phase(),
            height = next.height(),
            "keyboard transition"
        );
        self.state = next;
        Some(next)
    }

    /// Correct the reported frame height for windows that do not span the
    /// full screen: the keyboard panel overlaps the window only by
    /// `(window_height + window_origin_y) - (screen_height - raw_height)`.
    fn correct_height(&mut self, raw: f64, metrics: Option<WindowMetrics>) -> f64 {
        let Some(m) = metrics else {
            return raw.max(0.0);
        };
        if let Some((cached, height)) = self.corrected {
            if cached == m {
                return height;
            }
        }
        let height = ((m.window_height + m.window_origin_y) - (m.screen_height - raw)).max(0.0);
        self.corrected = Some((m, height));
        height
    }
}
