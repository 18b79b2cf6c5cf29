//! Error types for window construction and statistics queries.
//!
//! This module provides structured error types via `thiserror`. Empty-window
//! reads are deliberately not errors anywhere in the library: "no data yet"
//! is an expected steady state and is reported through `None` or zero
//! sentinels instead.

use thiserror::Error;

/// Result type alias for window operations that may fail.
pub type Result<T> = core::result::Result<T, WindowError>;

/// Errors that can occur when constructing or querying a window.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WindowError {
    /// Requested capacity cannot hold any elements.
    ///
    /// Fatal to the construction call; no partially built buffer is returned.
    #[error("Invalid capacity: {0} (must be > 0)")]
    InvalidCapacity(usize),

    /// Requested percentile is outside the valid range.
    ///
    /// Recoverable; callers should validate before asking or treat this as a
    /// programming error.
    #[error("Invalid percentile: {0} (must be within [0, 100])")]
    InvalidPercentile(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_capacity_display() {
        let err = WindowError::InvalidCapacity(0);
        assert_eq!(err.to_string(), "Invalid capacity: 0 (must be > 0)");
    }

    #[test]
    fn test_invalid_percentile_display() {
        let err = WindowError::InvalidPercentile(101.0);
        assert_eq!(
            err.to_string(),
            "Invalid percentile: 101 (must be within [0, 100])"
        );

        let err = WindowError::InvalidPercentile(-0.5);
        assert_eq!(
            err.to_string(),
            "Invalid percentile: -0.5 (must be within [0, 100])"
        );
    }
}
