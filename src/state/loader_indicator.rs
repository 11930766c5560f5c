//! Loading indicator with a minimum visible duration.
//!
//! A load that finishes almost immediately would otherwise make the
//! indicator flash for a single frame.

use std::time::{Duration, Instant};

/// Minimum time the indicator stays up once shown.
pub const MINIMUM_VISIBLE: Duration = Duration::from_millis(500);

/// Single show/hide cycle; overlapping cycles are not tracked.
#[derive(Debug, Clone, Default)]
pub struct LoaderIndicator {
    shown_at: Option<Instant>,
    hide_at: Option<Instant>,
}

impl LoaderIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the indicator and restarts the minimum-duration clock.
    pub fn show(&mut self, now: Instant) {
        self.shown_at = Some(now);
        self.hide_at = None;
    }

    /// Hides the indicator, but no earlier than [`MINIMUM_VISIBLE`] after `show`.
    pub fn hide_after_minimum_delay(&mut self, now: Instant) {
        let earliest = self
            .shown_at
            .map(|shown| shown + MINIMUM_VISIBLE)
            .unwrap_or(now);
        self.hide_at = Some(earliest.max(now));
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        match (self.shown_at, self.hide_at) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(_), Some(hide_at)) => now < hide_at,
        }
    }

    /// Time until a scheduled hide takes effect, for repaint scheduling.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let hide_at = self.hide_at?;
        self.shown_at?;
        hide_at.checked_duration_since(now).filter(|d| !d.is_zero())
    }
}
