//! Prelude module for convenient imports.
//!
//! Re-exports the statistics types together with the core prelude.
//!
//! # Example
//!
//! ```rust
//! use rollstat_metrics::prelude::*;
//!
//! let window = StatsWindow::<f64>::with_capacity(100)?;
//! assert!(window.is_empty());
//! # Ok::<(), WindowError>(())
//! ```

pub use crate::recorder::LatencyRecorder;
pub use crate::stats::{StatsSnapshot, StatsWindow, StatsWindowConfig, DEFAULT_CAPACITY};

pub use rollstat_core::prelude::*;
