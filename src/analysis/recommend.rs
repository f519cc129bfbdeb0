//! Algorithm recommendation table
//!
//! Maps an array size, a rough data profile and a priority to a suggested
//! algorithm. This is a fixed decision table, not a cost model.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::algorithms::Algorithm;

use super::classifier::Classification;

/// Arrays at or below this size get the small-input recommendation
pub const SMALL_ARRAY_SIZE: usize = 10;

/// Rough shape of the data to be sorted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataProfile {
    Sorted,
    NearlySorted,
    Random,
    Reverse,
}

impl From<Classification> for DataProfile {
    fn from(classification: Classification) -> Self {
        match classification {
            Classification::SingleElement | Classification::Sorted => DataProfile::Sorted,
            Classification::ReverseSorted => DataProfile::Reverse,
            Classification::NearlySorted => DataProfile::NearlySorted,
            Classification::Random => DataProfile::Random,
        }
    }
}

/// What matters most for the sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Stability,
    #[default]
    Time,
}

/// A suggested algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub name: &'static str,
    pub rationale: &'static str,
    /// Engine that implements the suggestion, if this crate has one
    pub algorithm: Option<Algorithm>,
}

impl Recommendation {
    fn new(name: &'static str, rationale: &'static str, algorithm: Option<Algorithm>) -> Self {
        Self {
            name,
            rationale,
            algorithm,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.rationale)
    }
}

/// Suggest an algorithm
pub fn recommend(size: usize, profile: DataProfile, priority: Priority) -> Recommendation {
    if size <= SMALL_ARRAY_SIZE {
        return match profile {
            DataProfile::Sorted | DataProfile::NearlySorted => Recommendation::new(
                "Insertion Sort",
                "Efficient for small, nearly sorted data",
                Some(Algorithm::Insertion),
            ),
            DataProfile::Random | DataProfile::Reverse => Recommendation::new(
                "Bubble Sort",
                "Simple and effective for small datasets",
                Some(Algorithm::Bubble),
            ),
        };
    }

    match (priority, profile) {
        (Priority::Stability, _) => Recommendation::new(
            "Merge Sort",
            "Stable and efficient for large datasets",
            Some(Algorithm::Merge),
        ),
        (Priority::Time, DataProfile::Random | DataProfile::Reverse) => Recommendation::new(
            "Quick Sort",
            "Fast for general purposes",
            Some(Algorithm::Quick),
        ),
        (Priority::Time, DataProfile::Sorted | DataProfile::NearlySorted) => {
            Recommendation::new("Heap Sort", "Efficient but not stable", None)
        }
    }
}
