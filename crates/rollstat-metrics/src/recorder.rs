//! Request-timing recorder built on [`StatsWindow`].
//!
//! The recorder is the consumer seam for a metrics-collection caller: a
//! timing subsystem records one duration per completed span, and a reporter
//! reads snapshots on its own schedule.

use std::time::{Duration, Instant};

use tracing::trace;

use rollstat_core::error::Result;

use crate::stats::{StatsSnapshot, StatsWindow, StatsWindowConfig};

/// Sliding-window recorder for span durations, in milliseconds.
///
/// One instance per logical owner; aggregate across workers externally if
/// samples come from several tasks.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use rollstat_metrics::recorder::LatencyRecorder;
///
/// let mut recorder = LatencyRecorder::new(256)?;
/// recorder.record(Duration::from_millis(12));
/// recorder.record(Duration::from_millis(48));
///
/// let stats = recorder.snapshot();
/// assert_eq!(stats.count, 2);
/// assert_eq!(stats.mean, 30.0);
/// # Ok::<(), rollstat_core::WindowError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LatencyRecorder {
    window: StatsWindow<f64>,
}

impl LatencyRecorder {
    /// Create a recorder retaining the last `capacity` spans.
    ///
    /// # Errors
    ///
    /// Returns [`rollstat_core::WindowError::InvalidCapacity`] if `capacity`
    /// is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            window: StatsWindow::with_capacity(capacity)?,
        })
    }

    /// Create a recorder with the default window capacity (1000 spans).
    #[must_use]
    pub fn default_capacity() -> Self {
        Self {
            // Default capacity is non-zero, so construction cannot fail.
            window: StatsWindow::new(StatsWindowConfig::default())
                .unwrap_or_else(|_| unreachable!("default capacity is non-zero")),
        }
    }

    /// Record one completed span.
    pub fn record(&mut self, elapsed: Duration) {
        self.record_ms(elapsed.as_secs_f64() * 1000.0);
    }

    /// Record one completed span duration, in milliseconds.
    pub fn record_ms(&mut self, duration_ms: f64) {
        self.window.push(duration_ms);
        trace!(duration_ms, "recorded span duration");
    }

    /// Time a closure and record its duration. Returns the closure's value.
    pub fn time<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let start = Instant::now();
        let out = f();
        self.record(start.elapsed());
        out
    }

    /// Snapshot of the aggregates over the retained spans.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot<f64> {
        self.window.snapshot()
    }

    /// Access the underlying statistics window (e.g. for percentiles).
    #[must_use]
    pub fn window(&self) -> &StatsWindow<f64> {
        &self.window
    }

    /// Drop all recorded spans.
    pub fn clear(&mut self) {
        self.window.clear();
    }
}

impl Default for LatencyRecorder {
    fn default() -> Self {
        Self::default_capacity()
    }
}
