//! # rollstat-core
//!
//! Core types for rolling sample statistics.
//!
//! This crate provides the foundational pieces used by the statistics layer:
//!
//! - [`RingBuffer`] - Generic fixed-capacity buffer with overwrite-on-full
//!   semantics and ordered traversal
//! - [`SampleFloat`] - Trait for numeric sample types (f32/f64)
//! - [`WindowError`] - Error taxonomy for construction and queries
//!
//! ## Feature Flags
//!
//! - `std` (default) - Enable standard library support
//! - `alloc` - Enable heap allocation without full std
//! - `serde` - Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use rollstat_core::prelude::*;
//!
//! let mut buffer: RingBuffer<u64> = RingBuffer::new(3)?;
//! buffer.push(10);
//! buffer.push(20);
//! buffer.push(30);
//! buffer.push(40); // evicts 10
//!
//! assert_eq!(buffer.to_vec(), vec![20, 30, 40]);
//! # Ok::<(), WindowError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

// The ring buffer heap-allocates its slot storage; there is no no-alloc
// configuration of this crate.
#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error!("rollstat-core requires either the `std` or the `alloc` feature");

pub mod error;
pub mod num;
pub mod prelude;
pub mod ring;

// Re-export core types at crate root
pub use error::{Result, WindowError};
pub use num::SampleFloat;
pub use ring::RingBuffer;
