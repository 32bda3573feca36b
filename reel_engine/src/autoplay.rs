// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay ticker.
//!
//! Every [`TICK`] the progress grows by `100 / (max(interval, MIN_INTERVAL) / TICK)`. When it
//! reaches the threshold for the active index the carousel advances and progress restarts at
//! zero. The first card uses [`FIRST_CARD_THRESHOLD`] instead of [`THRESHOLD`] and therefore
//! dwells about 37.5% longer.

use core::time::Duration;

/// Autoplay cadence.
pub const TICK: Duration = Duration::from_millis(80);
/// Intervals shorter than this are treated as this.
pub const MIN_INTERVAL: Duration = Duration::from_millis(160);
/// Progress needed to advance from any card but the first.
pub const THRESHOLD: f64 = 100.0;
// TODO: confirm with design whether the longer first-card dwell is intended.
/// Progress needed to advance from the first card.
pub const FIRST_CARD_THRESHOLD: f64 = 137.5;

/// Progress added per tick for `interval`.
pub fn increment(interval: Duration) -> f64 {
    let ms = interval.max(MIN_INTERVAL).as_millis() as f64;
    let tick_ms = TICK.as_millis() as f64;
    100.0 / (ms / tick_ms)
}

/// Progress needed to leave `active_index`.
pub fn threshold_for(active_index: usize) -> f64 {
    if active_index == 0 {
        FIRST_CARD_THRESHOLD
    } else {
        THRESHOLD
    }
}

/// Ticker state: progress and the next tick deadline (none while stopped).
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Ticker {
    progress: f64,
    next_tick: Option<Duration>,
}

impl Ticker {
    pub(crate) fn progress(&self) -> f64 {
        self.progress
    }

    pub(crate) fn next_tick(&self) -> Option<Duration> {
        self.next_tick
    }

    pub(crate) fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Restart from zero with the first tick one cadence after `now`.
    pub(crate) fn start(&mut self, now: Duration) {
        self.progress = 0.0;
        self.next_tick = Some(now + TICK);
    }

    /// Drop the pending tick. Progress is kept for display.
    pub(crate) fn stop(&mut self) {
        self.next_tick = None;
    }

    pub(crate) fn reset_progress(&mut self) {
        self.progress = 0.0;
    }

    /// Fire the due tick and schedule the next one.
    ///
    /// Returns true if the carousel should advance.
    pub(crate) fn fire(&mut self, interval: Duration, active_index: usize) -> bool {
        let Some(at) = self.next_tick else {
            return false;
        };
        self.next_tick = Some(at + TICK);
        self.progress += increment(interval);
        if self.progress >= threshold_for(active_index) {
            self.progress = 0.0;
            true
        } else {
            false
        }
    }
}
