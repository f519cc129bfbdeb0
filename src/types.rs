//! Core data types for SortVis-RS
//!
//! This module contains the value-level types shared by the sort engines,
//! the classifier and the reporter.
//!
//! # Main Types
//!
//! - [`SortKey`] - Bound for values a sort engine can record
//! - [`RunStatistics`] - Aggregate counters and wall-clock time of one sort run
//! - [`SortOutcome`] - Sorted output, recorded steps and statistics together
//!
//! The step log itself ([`Step`], [`StepSequence`]) lives in
//! [`crate::session`], next to the recorder and the playback controller that
//! produce and consume it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::session::types::StepSequence;

/// Maximum number of elements a sort engine will record.
///
/// Every step stores a full snapshot of the array, so the quadratic engines
/// grow as O(n^3) in memory. The interactive range is 5..=100.
pub const MAX_SORT_LEN: usize = 128;

/// Values that can flow through an instrumented sort.
///
/// Comparison engines are generic so that tests can sort keyed records and
/// observe stability; the default element type everywhere is `i64`.
pub trait SortKey: Copy + Ord + fmt::Display + fmt::Debug {}

impl<T> SortKey for T where T: Copy + Ord + fmt::Display + fmt::Debug {}

/// Aggregate counters for one sort run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Element comparisons performed
    pub comparisons: u64,
    /// Write-type mutations: swaps, shifts and placements
    pub swaps: u64,
    /// Merge calls (Merge Sort only)
    pub merges: u64,
    /// Outer-loop passes, or recursive partition/merge calls
    pub passes: u64,
    /// Wall-clock time spent inside the engine
    pub duration: Duration,
}

impl RunStatistics {
    /// Create zeroed statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Execution time in milliseconds
    pub fn duration_ms(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "comparisons: {}, swaps: {}, merges: {}, passes: {}, time: {:.2} ms",
            self.comparisons,
            self.swaps,
            self.merges,
            self.passes,
            self.duration_ms()
        )
    }
}

/// Result of running one instrumented sort
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortOutcome<T = i64> {
    /// The input, sorted non-decreasing
    pub sorted: Vec<T>,
    /// Every recorded step, in order
    pub steps: StepSequence<T>,
    /// Counters collected while sorting
    pub stats: RunStatistics,
}

impl<T: SortKey> SortOutcome<T> {
    /// Split into the parts a caller usually hands off separately
    pub fn into_parts(self) -> (Vec<T>, StepSequence<T>, RunStatistics) {
        (self.sorted, self.steps, self.stats)
    }
}

/// Check that a slice is non-decreasing
pub fn is_non_decreasing<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Check that a slice is non-increasing
pub fn is_non_increasing<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] >= w[1])
}
