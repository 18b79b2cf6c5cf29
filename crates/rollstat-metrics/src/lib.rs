//! # rollstat-metrics
//!
//! Sliding-window sample statistics for metrics collection.
//!
//! This crate layers incremental aggregate tracking on top of the
//! fixed-capacity [`RingBuffer`](rollstat_core::RingBuffer) from
//! `rollstat-core`:
//!
//! - [`StatsWindow`](stats::StatsWindow) - window of numeric samples with
//!   O(1) sum/mean/variance/std-dev, scanning extrema and nearest-rank
//!   percentiles
//! - [`LatencyRecorder`](recorder::LatencyRecorder) - span-duration
//!   recorder for request-timing consumers
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization/deserialization of configs and
//!   snapshots
//!
//! ## Example
//!
//! ```rust
//! use rollstat_metrics::prelude::*;
//!
//! let mut window = StatsWindow::<f64>::with_capacity(500)?;
//! window.push(12.5);
//! window.push(9.0);
//! window.push(14.25);
//!
//! let stats = window.snapshot();
//! assert_eq!(stats.count, 3);
//! assert_eq!(stats.max, 14.25);
//! # Ok::<(), WindowError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod prelude;
pub mod recorder;
pub mod stats;

pub use recorder::LatencyRecorder;
pub use stats::{StatsSnapshot, StatsWindow, StatsWindowConfig, DEFAULT_CAPACITY};
