//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types from rollstat-core.
//!
//! # Example
//!
//! ```rust
//! use rollstat_core::prelude::*;
//!
//! let buffer: RingBuffer<f64> = RingBuffer::new(16)?;
//! assert!(buffer.is_empty());
//! # Ok::<(), WindowError>(())
//! ```

pub use crate::error::{Result, WindowError};
pub use crate::num::SampleFloat;
pub use crate::ring::RingBuffer;
