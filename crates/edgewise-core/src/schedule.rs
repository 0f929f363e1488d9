//! Startup/recovery re-projection schedule.
//!
//! A content surface's own style sheets and scripts can finish loading
//! after the first projection and overwrite the injected properties.
//! Rather than requiring a load-completion signal from arbitrary content,
//! the schedule re-asserts the current snapshot on a bounded burst of
//! deadlines after attach and after each completed navigation. Firing is
//! unconditional — the point is to defeat an external overwrite, not to
//! reflect a state change — and harmlessly idempotent if the surface is
//! already gone.

use std::time::{Duration, Instant};

use tracing::debug;

/// Bounded queue of re-projection deadlines.
pub struct RetrySchedule {
    /// Pending deadlines, ascending.
    deadlines: Vec<Instant>,
    attach_retries: u32,
    retry_interval: Duration,
    nav_retry_delay: Duration,
}

impl RetrySchedule {
    pub fn new(attach_retries: u32, retry_interval: Duration, nav_retry_delay: Duration) -> Self {
        Self {
            deadlines: Vec::new(),
            attach_retries,
            retry_interval,
            nav_retry_delay,
        }
    }

    /// Arm the attach burst: `attach_retries` deadlines spaced
    /// `retry_interval` apart. Replaces any pending schedule.
    pub fn on_attach(&mut self, now: Instant) {
        self.deadlines.clear();
        for i in 1..=self.attach_retries {
            self.deadlines.push(now + self.retry_interval * i);
        }
        debug!(retries = self.attach_retries, "re-projection burst armed");
    }

    /// Arm the post-navigation recovery: one quick retry plus a fresh
    /// burst. Replaces any pending schedule.
    pub fn on_navigation_finished(&mut self, now: Instant) {
        self.on_attach(now);
        self.deadlines.insert(0, now + self.nav_retry_delay);
    }

    /// Pop every deadline that has elapsed, returning how many fired.
    pub fn due(&mut self, now: Instant) -> usize {
        let fired = self.deadlines.iter().take_while(|d| **d <= now).count();
        self.deadlines.drain(..fired);
        fired
    }

    /// Earliest pending deadline, for arming a host wakeup timer.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.first().copied()
    }

    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }
}
