//! Instrumented sort engines
//!
//! Each engine sorts a copy of its input and records a [`Step`] for every
//! comparison and every mutation, so the run can be replayed later by the
//! [`crate::session::PlaybackController`].
//!
//! # Engines
//!
//! | Algorithm | Iteration tag | Stable |
//! |---|---|---|
//! | Bubble | outer pass `i` | yes |
//! | Insertion | outer index `i` (from 1) | yes |
//! | Selection | outer index `i` | no |
//! | Merge | ordinal of the merge call | yes |
//! | Quick (Lomuto) | ordinal of the partition call | no |
//! | Count | always 0 | n/a |
//!
//! Comparison engines are generic over [`SortKey`]. Count Sort only accepts
//! non-negative `i64` values and fails before recording anything otherwise.
//!
//! Input validation (length bound, NaN rejection during parsing) happens at
//! the boundary: [`sort`] and [`crate::input`].
//!
//! [`Step`]: crate::session::Step

pub mod bubble;
pub mod counting;
pub mod info;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use info::AlgorithmInfo;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use crate::error::{Result, SortVisError};
use crate::session::{StepKind, StepRecorder};
use crate::types::{RunStatistics, SortKey, SortOutcome, MAX_SORT_LEN};

/// The six supported sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Count,
}

impl Algorithm {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Count => "Count Sort",
        }
    }

    /// Short identifier used in configuration files
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Count => "count",
        }
    }

    /// Get all algorithms
    pub fn all() -> &'static [Algorithm] {
        &[
            Algorithm::Bubble,
            Algorithm::Insertion,
            Algorithm::Selection,
            Algorithm::Merge,
            Algorithm::Quick,
            Algorithm::Count,
        ]
    }

    /// Whether the engine compares elements (as opposed to counting them)
    pub fn is_comparison_sort(&self) -> bool {
        !matches!(self, Algorithm::Count)
    }

    /// Complexity table and pseudocode
    pub fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo::for_algorithm(*self)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Algorithm {
    type Err = SortVisError;

    /// Accepts display names ("Quick Sort") and ids ("quick"), case-insensitively
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        let stem = normalized
            .strip_suffix("sort")
            .unwrap_or(normalized.as_str());

        match stem {
            "bubble" => Ok(Algorithm::Bubble),
            "insertion" => Ok(Algorithm::Insertion),
            "selection" => Ok(Algorithm::Selection),
            "merge" => Ok(Algorithm::Merge),
            "quick" => Ok(Algorithm::Quick),
            "count" | "counting" => Ok(Algorithm::Count),
            _ => Err(SortVisError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Sort `input` with `algorithm`, recording every step
///
/// Rejects input longer than [`MAX_SORT_LEN`] and, for Count Sort, negative
/// or oversized values. No steps are produced on error.
pub fn sort(algorithm: Algorithm, input: &[i64]) -> Result<SortOutcome> {
    check_len(input.len())?;

    match algorithm {
        Algorithm::Count => counting::sort(input),
        other => sort_keys(other, input),
    }
}

/// Sort by algorithm name, as received from a UI selector
pub fn sort_by_name(name: &str, input: &[i64]) -> Result<SortOutcome> {
    let algorithm = name.parse::<Algorithm>().map_err(|e| {
        tracing::warn!("Rejected sort request: {}", e);
        e
    })?;
    sort(algorithm, input)
}

/// Sort arbitrary keys with one of the comparison engines
pub fn sort_keys<T: SortKey>(algorithm: Algorithm, input: &[T]) -> Result<SortOutcome<T>> {
    check_len(input.len())?;

    match algorithm {
        Algorithm::Bubble => Ok(bubble::sort(input)),
        Algorithm::Insertion => Ok(insertion::sort(input)),
        Algorithm::Selection => Ok(selection::sort(input)),
        Algorithm::Merge => Ok(merge::sort(input)),
        Algorithm::Quick => Ok(quick::sort(input)),
        Algorithm::Count => Err(SortVisError::UnsupportedAlgorithm(
            "Count Sort only sorts non-negative integers".to_string(),
        )),
    }
}

fn check_len(len: usize) -> Result<()> {
    if len > MAX_SORT_LEN {
        tracing::warn!("Rejected {} element input (max {})", len, MAX_SORT_LEN);
        return Err(SortVisError::InputTooLarge {
            len,
            max: MAX_SORT_LEN,
        });
    }
    Ok(())
}

/// Shared driver for every engine
///
/// Copies the input, short-circuits trivial lengths (0 elements: no steps,
/// 1 element: a single `Done` step), times the engine and logs a summary.
pub(crate) fn run_engine<T, F>(algorithm: Algorithm, input: &[T], engine: F) -> SortOutcome<T>
where
    T: SortKey,
    F: FnOnce(&mut [T], &mut StepRecorder<T>, &mut RunStatistics),
{
    let start = Instant::now();
    let mut array = input.to_vec();
    let mut recorder = StepRecorder::new();
    let mut stats = RunStatistics::new();

    match array.len() {
        0 => {}
        1 => recorder.record(
            StepKind::Done,
            &array,
            format!("Nothing to sort: {} is the only element", array[0]),
            &[],
            &[],
        ),
        _ => engine(&mut array, &mut recorder, &mut stats),
    }

    stats.duration = start.elapsed();
    let steps = recorder.finish();

    tracing::debug!(
        "{} on {} elements: {} steps, {}",
        algorithm,
        array.len(),
        steps.len(),
        stats
    );

    SortOutcome {
        sorted: array,
        steps,
        stats,
    }
}

/// Render values as `[a, b, c]` for step descriptions
pub(crate) fn format_values<T: SortKey>(values: &[T]) -> String {
    let joined = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}
