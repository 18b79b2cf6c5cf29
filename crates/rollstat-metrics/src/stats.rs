//! Sliding-window sample statistics.
//!
//! The [`StatsWindow`] type layers incremental aggregate tracking on top of
//! a [`RingBuffer`]: sum, mean, variance and standard deviation are O(1)
//! reads; extrema and percentiles scan the live window.

use rollstat_core::{
    error::{Result, WindowError},
    num::SampleFloat,
    ring::RingBuffer,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default window capacity for convenience constructors.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Configuration for a [`StatsWindow`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatsWindowConfig {
    /// Maximum number of samples retained.
    pub capacity: usize,
}

impl Default for StatsWindowConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl StatsWindowConfig {
    /// Create a new configuration with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Set the retained-sample capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

/// Snapshot of the aggregate statistics of a window.
///
/// An independent copy; the caller owns it and may freely retain or discard
/// it while the window keeps moving.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: SampleFloat"))]
pub struct StatsSnapshot<T: SampleFloat> {
    /// Number of samples currently in the window.
    pub count: usize,
    /// Sum of the samples in the window.
    pub sum: T,
    /// Arithmetic mean of the samples (zero if empty).
    pub mean: T,
    /// Smallest sample in the window (zero if empty).
    pub min: T,
    /// Largest sample in the window (zero if empty).
    pub max: T,
    /// Population variance of the samples (zero below 2 samples).
    pub variance: T,
    /// Standard deviation of the samples.
    pub std_dev: T,
}

/// A sliding window of numeric samples with incrementally maintained
/// aggregates.
///
/// `StatsWindow` tracks the most recent `capacity` samples of a stream
/// (e.g. per-request latencies) and answers aggregate queries without
/// re-scanning the window where an accumulator suffices:
///
/// - [`sum`](StatsWindow::sum), [`mean`](StatsWindow::mean),
///   [`variance`](StatsWindow::variance) and
///   [`std_dev`](StatsWindow::std_dev) are O(1)
/// - [`min`](StatsWindow::min) and [`max`](StatsWindow::max) are O(n):
///   eviction can remove the current extremum, and there is no cheap way to
///   find its successor, so the true extremum is recomputed from the live
///   window on every call. This is a deliberate correctness-over-speed
///   tradeoff for extrema only.
/// - [`percentile`](StatsWindow::percentile) and
///   [`median`](StatsWindow::median) sort a copy of the window, O(n log n)
///
/// Every aggregate returns a zero sentinel on an empty window; "no data
/// yet" is an expected steady state, not an error.
///
/// Single-owner type: no internal locking. Callers sharing a window across
/// tasks must serialize access themselves.
///
/// # Example
///
/// ```rust
/// use rollstat_metrics::stats::StatsWindow;
///
/// let mut window = StatsWindow::<f64>::with_capacity(3)?;
/// window.push(12.0);
/// window.push(8.0);
/// window.push(10.0);
/// window.push(22.0); // evicts 12.0
///
/// assert_eq!(window.sum(), 40.0);
/// assert_eq!(window.min(), 8.0);
/// assert_eq!(window.max(), 22.0);
/// # Ok::<(), rollstat_core::WindowError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StatsWindow<T: SampleFloat> {
    config: StatsWindowConfig,
    ring: RingBuffer<T>,
    /// Running sum over the samples currently resident in the window.
    sum: T,
    /// Running sum of squares over the same samples.
    sum_sq: T,
}

impl<T: SampleFloat> StatsWindow<T> {
    /// Create a new window from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidCapacity`] if the configured capacity
    /// is zero.
    pub fn new(config: StatsWindowConfig) -> Result<Self> {
        Ok(Self {
            ring: RingBuffer::new(config.capacity)?,
            config,
            sum: T::ZERO,
            sum_sq: T::ZERO,
        })
    }

    /// Create a new window with the given capacity.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::new(StatsWindowConfig::new(capacity))
    }

    /// Returns the configuration this window was built from.
    pub fn config(&self) -> &StatsWindowConfig {
        &self.config
    }

    /// Push a sample into the window. O(1).
    ///
    /// When the window is full the about-to-be-evicted oldest sample is
    /// subtracted from the accumulators before the ring is updated, and the
    /// new sample is added after. That ordering keeps `sum`/`sum_sq` equal
    /// to the aggregates of exactly the resident samples across arbitrarily
    /// many overwrite cycles.
    pub fn push(&mut self, value: T) {
        if self.ring.is_full() {
            if let Some(&oldest) = self.ring.oldest() {
                self.sum = self.sum - oldest;
                self.sum_sq = self.sum_sq - oldest * oldest;
            }
        }

        self.ring.push(value);

        self.sum = self.sum + value;
        self.sum_sq = self.sum_sq + value * value;
    }

    /// Sum of the samples in the window. O(1).
    #[must_use]
    pub fn sum(&self) -> T {
        self.sum
    }

    /// Arithmetic mean of the samples, or zero if empty. O(1).
    #[must_use]
    pub fn mean(&self) -> T {
        if self.ring.is_empty() {
            return T::ZERO;
        }
        self.sum / <T as SampleFloat>::from_usize(self.ring.len())
    }

    /// Smallest sample in the window, or zero if empty. O(n).
    #[must_use]
    pub fn min(&self) -> T {
        if self.ring.is_empty() {
            return T::ZERO;
        }

        let mut min = T::INFINITY;
        for &value in self.ring.iter() {
            if value < min {
                min = value;
            }
        }
        min
    }

    /// Largest sample in the window, or zero if empty. O(n).
    #[must_use]
    pub fn max(&self) -> T {
        if self.ring.is_empty() {
            return T::ZERO;
        }

        let mut max = T::NEG_INFINITY;
        for &value in self.ring.iter() {
            if value > max {
                max = value;
            }
        }
        max
    }

    /// Population variance of the samples, or zero below 2 samples. O(1).
    ///
    /// Computed as `sum_sq / n - mean^2` from the running accumulators. Near
    /// zero variance this formula can produce a tiny negative value through
    /// floating-point cancellation; negative results are clamped to zero.
    #[must_use]
    pub fn variance(&self) -> T {
        let n = self.ring.len();
        if n < 2 {
            return T::ZERO;
        }

        let count = <T as SampleFloat>::from_usize(n);
        let mean = self.sum / count;
        let variance = self.sum_sq / count - mean * mean;

        if variance > T::ZERO {
            variance
        } else {
            T::ZERO
        }
    }

    /// Standard deviation of the samples. Always >= 0. O(1).
    #[must_use]
    pub fn std_dev(&self) -> T {
        self.variance().sqrt()
    }

    /// Nearest-rank percentile of the window. O(n log n).
    ///
    /// Copies the live window, sorts ascending and selects the sample at
    /// rank `ceil(p/100 * n)` (clamped into the window), so the result is
    /// always an actual sample, never an interpolation. Returns zero if the
    /// window is empty.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidPercentile`] if `p` is outside
    /// `[0, 100]` (NaN included).
    pub fn percentile(&self, p: f64) -> Result<T> {
        if !(0.0..=100.0).contains(&p) {
            return Err(WindowError::InvalidPercentile(p));
        }
        Ok(self.nearest_rank(p))
    }

    /// Median of the window (nearest-rank 50th percentile). O(n log n).
    #[must_use]
    pub fn median(&self) -> T {
        self.nearest_rank(50.0)
    }

    /// Nearest-rank selection for a pre-validated percentile.
    fn nearest_rank(&self, p: f64) -> T {
        let n = self.ring.len();
        if n == 0 {
            return T::ZERO;
        }

        let mut sorted = self.ring.to_vec();
        sorted.sort_by(|a, b| a.total_cmp_fn(b));

        let rank = ((p / 100.0) * n as f64).ceil() as usize;
        let index = rank.saturating_sub(1).min(n - 1);
        sorted[index]
    }

    /// Snapshot of all aggregates at once.
    ///
    /// Inherits the costs and policies of the individual accessors (the
    /// extrema scan the window).
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot<T> {
        StatsSnapshot {
            count: self.ring.len(),
            sum: self.sum(),
            mean: self.mean(),
            min: self.min(),
            max: self.max(),
            variance: self.variance(),
            std_dev: self.std_dev(),
        }
    }

    /// Drop all samples and reset the accumulators.
    ///
    /// A subsequent `push` behaves as on a freshly constructed window.
    pub fn clear(&mut self) {
        self.ring.clear();
        self.sum = T::ZERO;
        self.sum_sq = T::ZERO;
    }

    /// Number of samples currently in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Maximum number of samples the window retains.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Returns `true` if the window holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns `true` if the window is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Get a sample by logical index (0 = oldest).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.ring.get(index)
    }

    /// Oldest sample in the window, or `None` if empty.
    #[must_use]
    pub fn oldest(&self) -> Option<&T> {
        self.ring.oldest()
    }

    /// Newest sample in the window, or `None` if empty.
    #[must_use]
    pub fn newest(&self) -> Option<&T> {
        self.ring.newest()
    }

    /// Iterator over the samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.ring.iter()
    }

    /// Copy the samples into a newly allocated `Vec`, oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.ring.to_vec()
    }
}
