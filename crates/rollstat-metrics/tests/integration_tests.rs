//! Integration tests for rollstat-metrics.
//!
//! Scenario tests exercising the statistics window and the recorder the way
//! a metrics-collection caller would.

use std::time::Duration;

use approx::assert_relative_eq;

use rollstat_metrics::prelude::*;

// ============================================================================
// Test Utilities
// ============================================================================

/// Push a slice of samples into a fresh window.
fn window_from(samples: &[f64], capacity: usize) -> StatsWindow<f64> {
    let mut window = StatsWindow::<f64>::with_capacity(capacity).unwrap();
    for &v in samples {
        window.push(v);
    }
    window
}

// ============================================================================
// End-to-End Window Scenarios
// ============================================================================

#[test]
fn test_reporting_cycle() {
    // A collector pushes latencies; a reporter reads a snapshot each cycle.
    let mut window = StatsWindow::<f64>::with_capacity(5).unwrap();

    window.push(10.0);
    window.push(20.0);
    window.push(30.0);

    let first = window.snapshot();
    assert_eq!(first.count, 3);
    assert_eq!(first.sum, 60.0);
    assert_eq!(first.mean, 20.0);

    // More traffic arrives, the window slides.
    for v in [40.0, 50.0, 60.0, 70.0] {
        window.push(v);
    }

    let second = window.snapshot();
    assert_eq!(second.count, 5);
    assert_eq!(second.sum, 250.0); // 30 + 40 + 50 + 60 + 70
    assert_eq!(second.min, 30.0);
    assert_eq!(second.max, 70.0);

    // The earlier snapshot is an independent copy, untouched by the slide.
    assert_eq!(first.sum, 60.0);
}

#[test]
fn test_extremum_eviction_scenario() {
    // Capacity-2 window: 5, 3, 8 leaves {3, 8}; a further 1 leaves {8, 1}.
    let mut window = StatsWindow::<f64>::with_capacity(2).unwrap();

    window.push(5.0);
    window.push(3.0);
    window.push(8.0);
    assert_eq!(window.to_vec(), vec![3.0, 8.0]);
    assert_eq!(window.max(), 8.0);
    assert_eq!(window.min(), 3.0);

    window.push(1.0);
    assert_eq!(window.to_vec(), vec![8.0, 1.0]);
    assert_eq!(window.min(), 1.0);
    assert_eq!(window.max(), 8.0);
}

#[test]
fn test_long_churn_no_drift() {
    // The accumulators must stay faithful to the live window across many
    // thousand overwrite cycles.
    let mut window = StatsWindow::<f64>::with_capacity(64).unwrap();

    for i in 0..50_000u64 {
        // Deterministic, irregular sample stream
        let v = ((i * 2_654_435_761) % 1_000_003) as f64 / 97.0;
        window.push(v);
    }

    let live: Vec<f64> = window.to_vec();
    let expected_sum: f64 = live.iter().sum();
    let expected_sq: f64 = live.iter().map(|v| v * v).sum();

    assert_relative_eq!(window.sum(), expected_sum, max_relative = 1e-9);

    let n = live.len() as f64;
    let mean = expected_sum / n;
    let expected_variance = (expected_sq / n - mean * mean).max(0.0);
    assert_relative_eq!(window.variance(), expected_variance, max_relative = 1e-6);
}

#[test]
fn test_percentile_worked_example() {
    let window = window_from(&[1.0, 2.0, 3.0, 4.0], 4);

    // Nearest rank: ceil(0.5 * 4) - 1 = 1 -> sorted[1]
    assert_eq!(window.percentile(50.0).unwrap(), 2.0);
    assert_eq!(window.median(), 2.0);
    assert_eq!(window.percentile(0.0).unwrap(), 1.0);
    assert_eq!(window.percentile(100.0).unwrap(), 4.0);
    // 75th percentile: ceil(0.75 * 4) - 1 = 2 -> sorted[2]
    assert_eq!(window.percentile(75.0).unwrap(), 3.0);
}

#[test]
fn test_error_scenarios() {
    assert_eq!(
        StatsWindow::<f64>::with_capacity(0).unwrap_err(),
        WindowError::InvalidCapacity(0)
    );
    assert_eq!(
        RingBuffer::<f64>::new(0).unwrap_err(),
        WindowError::InvalidCapacity(0)
    );

    let window = window_from(&[1.0, 2.0], 4);
    assert_eq!(
        window.percentile(-1.0).unwrap_err(),
        WindowError::InvalidPercentile(-1.0)
    );
    assert_eq!(
        window.percentile(101.0).unwrap_err(),
        WindowError::InvalidPercentile(101.0)
    );
}

#[test]
fn test_clear_then_reuse() {
    let mut window = window_from(&[9.0, 9.0, 9.0], 3);
    window.clear();

    assert_eq!(window.len(), 0);
    assert_eq!(window.sum(), 0.0);
    assert_eq!(window.mean(), 0.0);
    assert_eq!(window.min(), 0.0);
    assert_eq!(window.max(), 0.0);

    window.push(1.5);
    window.push(2.5);
    assert_eq!(window.sum(), 4.0);
    assert_eq!(window.variance(), 0.25);
}

#[test]
fn test_reads_are_idempotent() {
    let window = window_from(&[4.0, 2.0, 6.0], 8);

    assert_eq!(window.snapshot(), window.snapshot());
    assert_eq!(window.percentile(90.0).unwrap(), window.percentile(90.0).unwrap());
    assert_eq!(window.get(1), window.get(1));
    assert_eq!(window.oldest(), window.oldest());
    assert_eq!(window.to_vec(), window.to_vec());
}

// ============================================================================
// Recorder Scenarios
// ============================================================================

#[test]
fn test_recorder_feeds_window() {
    let mut recorder = LatencyRecorder::new(100).unwrap();

    for ms in [12.0, 8.0, 30.0, 6.0] {
        recorder.record_ms(ms);
    }
    recorder.record(Duration::from_millis(4));

    let stats = recorder.snapshot();
    assert_eq!(stats.count, 5);
    assert_eq!(stats.sum, 60.0);
    assert_eq!(stats.min, 4.0);
    assert_eq!(stats.max, 30.0);

    // Percentiles go through the underlying window.
    let p50 = recorder.window().percentile(50.0).unwrap();
    assert_eq!(p50, 8.0); // sorted {4, 6, 8, 12, 30}, ceil(0.5*5)-1 = 2
}

#[test]
fn test_recorder_time_closure() {
    let mut recorder = LatencyRecorder::new(10).unwrap();

    let sum: u64 = recorder.time(|| (0..1000u64).sum());

    assert_eq!(sum, 499_500);
    let stats = recorder.snapshot();
    assert_eq!(stats.count, 1);
    assert!(stats.max >= 0.0);
}
