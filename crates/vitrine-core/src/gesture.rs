//! Tap and swipe recognition for the overlay.

use std::time::Duration;

use crate::Instant;

/// Classification of a tap relative to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapKind {
    /// First tap, or the previous tap was too long ago.
    Single,
    /// Arrived strictly within the double-tap window of the previous tap.
    Double,
}

/// Detects double-taps by comparing consecutive tap instants.
///
/// Every registered tap becomes the new reference point, so a rapid run of
/// taps yields a double-tap for each tap after the first.
#[derive(Debug, Clone)]
pub struct TapTracker {
    window: Duration,
    last_tap: Option<Instant>,
}

impl TapTracker {
    /// Create a tracker with the given double-tap window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_tap: None,
        }
    }

    /// Register a tap and classify it.
    pub fn register(&mut self, at: Instant) -> TapKind {
        let kind = match self.last_tap {
            // saturating: an out-of-order instant counts as zero gap
            Some(last) if at.saturating_duration_since(last) < self.window => TapKind::Double,
            _ => TapKind::Single,
        };
        self.last_tap = Some(at);
        kind
    }

    /// Record a tap without classifying it.
    pub fn record(&mut self, at: Instant) {
        self.last_tap = Some(at);
    }

    /// Instant of the most recent tap.
    pub fn last_tap(&self) -> Option<Instant> {
        self.last_tap
    }

    /// Forget the previous tap.
    pub fn reset(&mut self) {
        self.last_tap = None;
    }
}

/// Tracks a vertical touch displacement for swipe-to-dismiss.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f64,
    start_y: Option<f64>,
}

impl SwipeTracker {
    /// Create a tracker with the given dismiss threshold in pixels.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_y: None,
        }
    }

    /// Record the vertical coordinate at touch start.
    pub fn begin(&mut self, y: f64) {
        self.start_y = Some(y);
    }

    /// Finish the touch and return the absolute vertical displacement.
    ///
    /// Returns `None` when no touch start was recorded.
    pub fn finish(&mut self, y: f64) -> Option<f64> {
        self.start_y.take().map(|start| (y - start).abs())
    }

    /// Whether a displacement is large enough to dismiss.
    pub fn is_dismiss(&self, displacement: f64) -> bool {
        displacement > self.threshold
    }

    /// Vertical coordinate of the touch in progress.
    pub fn start_y(&self) -> Option<f64> {
        self.start_y
    }

    /// Drop any touch in progress.
    pub fn cancel(&mut self) {
        self.start_y = None;
    }
}
