//! Core layout synchronization engine for edge-to-edge WebView hosting.
//!
//! Converts raw, platform-delivered window geometry (system-bar insets and
//! on-screen keyboard frames) into a stable stream of [`LayoutState`]
//! snapshots:
//! - [`KeyboardTracker`] absorbs noisy show/hide/frame callbacks into a
//!   four-phase transition machine with a cancellable hide debounce
//! - [`LayoutAggregator`] merges insets and keyboard state into one
//!   change-detected snapshot
//! - [`RetrySchedule`] re-asserts the current snapshot for a bounded window
//!   after a content surface (re)loads
//! - [`SyncEngine`] wires the above behind a single event-driven API
//!
//! Everything here is platform-independent and single-threaded: the host's
//! UI loop feeds events in, passes `Instant::now()` for timed behavior, and
//! arms a wakeup timer from `next_deadline()`.

pub mod config;
pub mod engine;
pub mod error;
pub mod keyboard;
pub mod layout;
pub mod schedule;
pub mod source;
pub mod types;

pub use config::SyncConfig;
pub use engine::{EngineUpdate, SyncEngine};
pub use error::PlatformError;
pub use keyboard::KeyboardTracker;
pub use layout::LayoutAggregator;
pub use schedule::RetrySchedule;
pub use source::{
    KeyboardSignal, NoopControl, PlatformControl, RawInsetEvent, ScaleFactor, WindowMetrics,
};
pub use types::{Insets, KeyboardPhase, KeyboardState, LayoutState};
