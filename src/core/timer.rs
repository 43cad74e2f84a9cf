//! Elapsed play time.
//!
//! `RoundTimer` never reads a clock. The host calls `tick` once per second
//! and the timer adds a second while it is running.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Time added per clock tick.
pub const TICK: Duration = Duration::from_secs(1);

/// Tick-driven elapsed-time accumulator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTimer {
    elapsed: Duration,
    running: bool,
}

impl RoundTimer {
    /// Create a stopped timer at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting. No-op if already running.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop counting. No-op if already stopped.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and clear the elapsed time.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance by one tick.
    ///
    /// Returns the new elapsed time, or `None` if the timer is stopped.
    pub fn tick(&mut self) -> Option<Duration> {
        if !self.running {
            return None;
        }
        self.elapsed += TICK;
        Some(self.elapsed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}
