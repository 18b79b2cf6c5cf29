//! Numeric type abstractions for sample statistics.
//!
//! This module defines the [`SampleFloat`] trait which abstracts over `f32`
//! and `f64` for generic statistics over numeric samples.

use core::cmp::Ordering;
use num_traits::{Float, FromPrimitive, ToPrimitive};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

/// Trait for floating-point sample types.
///
/// This trait provides a common interface for `f32` and `f64`, enabling
/// generic implementations of windowed statistics. It carries only what the
/// statistics layer needs: a zero identity for accumulators and empty-window
/// sentinels, infinities to seed extrema scans, a count conversion for mean
/// and variance, and a deterministic comparator for percentile sorting.
///
/// # Example
///
/// ```rust
/// use rollstat_core::SampleFloat;
///
/// fn mean_of<T: SampleFloat>(sum: T, count: usize) -> T {
///     if count == 0 {
///         return T::ZERO;
///     }
///     sum / T::from_usize(count)
/// }
/// ```
#[cfg(feature = "serde")]
pub trait SampleFloat:
    Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + Serialize + DeserializeOwned + 'static
{
    /// Positive infinity (minimum-scan seed).
    const INFINITY: Self;
    /// Negative infinity (maximum-scan seed).
    const NEG_INFINITY: Self;
    /// Zero value (accumulator identity and empty-window sentinel).
    const ZERO: Self;

    /// Convert from `usize`.
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Total comparison that handles NaN consistently.
    ///
    /// NaN values are ordered after all other values (including +infinity).
    /// This ensures deterministic sorting behavior.
    #[must_use]
    fn total_cmp_fn(&self, other: &Self) -> Ordering;
}

#[cfg(not(feature = "serde"))]
pub trait SampleFloat:
    Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + 'static
{
    /// Positive infinity (minimum-scan seed).
    const INFINITY: Self;
    /// Negative infinity (maximum-scan seed).
    const NEG_INFINITY: Self;
    /// Zero value (accumulator identity and empty-window sentinel).
    const ZERO: Self;

    /// Convert from `usize`.
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Total comparison that handles NaN consistently.
    ///
    /// NaN values are ordered after all other values (including +infinity).
    /// This ensures deterministic sorting behavior.
    #[must_use]
    fn total_cmp_fn(&self, other: &Self) -> Ordering;
}

impl SampleFloat for f32 {
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;
    const ZERO: Self = 0.0;

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f32
    }

    #[inline]
    fn total_cmp_fn(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl SampleFloat for f64 {
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;
    const ZERO: Self = 0.0;

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f64
    }

    #[inline]
    fn total_cmp_fn(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}
