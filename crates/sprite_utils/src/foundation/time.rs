//! Logical game time
//!
//! Sprite lifetimes are measured against simulation time rather than the
//! wall clock, so pausing the host loop also pauses every expiration.

use std::time::Duration;

/// Logical clock advanced by the host loop once per frame
#[derive(Debug, Clone, Default)]
pub struct GameClock {
    now: Duration,
    frame_count: u64,
    paused: bool,
}

impl GameClock {
    /// Create a new clock at time zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one frame of `delta`
    ///
    /// Does nothing while the clock is paused.
    pub fn advance(&mut self, delta: Duration) {
        if self.paused {
            return;
        }
        self.now = self.now.saturating_add(delta);
        self.frame_count += 1;
    }

    /// Logical time elapsed since the clock started
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Number of frames the clock has advanced
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Stop the clock from advancing
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Let the clock advance again
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Check if the clock is currently paused
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }
}
