//! Array shape classification
//!
//! Inspects an array and decides which of five shapes it has, in priority
//! order:
//!
//! 1. at most one element
//! 2. non-decreasing
//! 3. non-increasing
//! 4. nearly sorted: no element further than `ceil(len * ratio)` positions
//!    from its sorted position
//! 5. random
//!
//! The nearly-sorted test is a heuristic, not a rigorous presortedness
//! metric.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SortVisError};
use crate::types::{is_non_decreasing, is_non_increasing};

/// Default displacement ratio for "nearly sorted"
pub const DEFAULT_NEARLY_SORTED_RATIO: f64 = 0.1;

/// Shape of an array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    SingleElement,
    Sorted,
    ReverseSorted,
    NearlySorted,
    Random,
}

impl Classification {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Classification::SingleElement => "Single Element",
            Classification::Sorted => "Sorted",
            Classification::ReverseSorted => "Reverse Sorted",
            Classification::NearlySorted => "Nearly Sorted",
            Classification::Random => "Random",
        }
    }

    /// One-sentence analysis of the array
    pub fn analysis(&self) -> &'static str {
        match self {
            Classification::SingleElement => "The array contains only one element.",
            Classification::Sorted => "The array is already sorted.",
            Classification::ReverseSorted => "The array is reverse sorted.",
            Classification::NearlySorted => "The array is nearly sorted.",
            Classification::Random => "The array appears to be random.",
        }
    }

    /// Recommended approach for this shape
    pub fn recommendation(&self) -> &'static str {
        match self {
            Classification::SingleElement | Classification::Sorted => "No sorting required.",
            Classification::ReverseSorted => {
                "Reverse the array and use Merge Sort for efficiency."
            }
            Classification::NearlySorted => {
                "Use Insertion Sort or a Heap-based sorting algorithm for efficiency."
            }
            Classification::Random => {
                "Use Quick Sort for large arrays or Merge Sort for stable sorting."
            }
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// How displacement from the sorted position is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplacementMetric {
    /// Rank from a stable sort of the indices; each duplicate keeps its own slot
    #[default]
    StableRank,
    /// First sorted position holding an equal value (`indexOf` semantics);
    /// understates displacement when values repeat
    FirstOccurrence,
}

/// Classifier settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Fraction of the length an element may be displaced and still count as
    /// nearly sorted
    pub nearly_sorted_ratio: f64,
    pub metric: DisplacementMetric,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            nearly_sorted_ratio: DEFAULT_NEARLY_SORTED_RATIO,
            metric: DisplacementMetric::default(),
        }
    }
}

/// Pure classifier; never mutates its input
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    /// Create a classifier with settings
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Get the settings
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify `array`; empty input is rejected
    pub fn classify(&self, array: &[i64]) -> Result<Classification> {
        if array.is_empty() {
            return Err(SortVisError::InvalidInput(
                "Please enter a non-empty array".to_string(),
            ));
        }

        let classification = if array.len() == 1 {
            Classification::SingleElement
        } else if is_non_decreasing(array) {
            Classification::Sorted
        } else if is_non_increasing(array) {
            Classification::ReverseSorted
        } else if self.max_displacement(array) <= self.displacement_limit(array.len()) {
            Classification::NearlySorted
        } else {
            Classification::Random
        };

        tracing::debug!("Classified {} elements as {}", array.len(), classification);
        Ok(classification)
    }

    /// Largest displacement allowed for "nearly sorted"
    pub fn displacement_limit(&self, len: usize) -> usize {
        (len as f64 * self.config.nearly_sorted_ratio).ceil() as usize
    }

    /// Largest distance of any element from its sorted position
    pub fn max_displacement(&self, array: &[i64]) -> usize {
        let positions = match self.config.metric {
            DisplacementMetric::StableRank => stable_ranks(array),
            DisplacementMetric::FirstOccurrence => first_occurrence_ranks(array),
        };

        positions
            .iter()
            .enumerate()
            .map(|(i, &rank)| rank.abs_diff(i))
            .max()
            .unwrap_or(0)
    }
}

/// Classify with default settings
pub fn classify(array: &[i64]) -> Result<Classification> {
    Classifier::default().classify(array)
}

/// Sorted position of each element, ties broken by original order
fn stable_ranks(array: &[i64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..array.len()).collect();
    order.sort_by_key(|&i| array[i]);

    let mut ranks = vec![0; array.len()];
    for (rank, &original) in order.iter().enumerate() {
        ranks[original] = rank;
    }
    ranks
}

/// Sorted position of the first equal value for each element
fn first_occurrence_ranks(array: &[i64]) -> Vec<usize> {
    let mut sorted = array.to_vec();
    sorted.sort_unstable();
    array
        .iter()
        .map(|value| sorted.partition_point(|v| v < value))
        .collect()
}
