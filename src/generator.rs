//! Array generators
//!
//! Produces input arrays for the visualizer. All randomness comes from a
//! seeded [`ChaCha8Rng`], so a seed fully determines the output.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SortVisError;

/// Smallest generated value (inclusive)
pub const MIN_VALUE: i64 = 10;
/// Largest generated value (exclusive)
pub const MAX_VALUE: i64 = 300;

/// Shape of a generated array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayPattern {
    #[default]
    Random,
    /// Ascending
    BestCase,
    /// Descending
    WorstCase,
    NearlySorted,
}

impl ArrayPattern {
    pub fn all() -> &'static [ArrayPattern] {
        &[
            ArrayPattern::Random,
            ArrayPattern::BestCase,
            ArrayPattern::WorstCase,
            ArrayPattern::NearlySorted,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ArrayPattern::Random => "Random",
            ArrayPattern::BestCase => "Best Case",
            ArrayPattern::WorstCase => "Worst Case",
            ArrayPattern::NearlySorted => "Nearly Sorted",
        }
    }
}

impl fmt::Display for ArrayPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ArrayPattern {
    type Err = SortVisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "random" => Ok(ArrayPattern::Random),
            "bestcase" | "best" | "sorted" => Ok(ArrayPattern::BestCase),
            "worstcase" | "worst" | "reverse" => Ok(ArrayPattern::WorstCase),
            "nearlysorted" | "nearly" => Ok(ArrayPattern::NearlySorted),
            _ => Err(SortVisError::InvalidInput(format!(
                "unknown array pattern: {}",
                s
            ))),
        }
    }
}

/// Seeded array generator
#[derive(Debug, Clone)]
pub struct ArrayGenerator {
    rng: ChaCha8Rng,
}

impl ArrayGenerator {
    /// Create a deterministic generator
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the OS
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Generate an array of `size` with the given shape
    pub fn generate(&mut self, pattern: ArrayPattern, size: usize) -> Vec<i64> {
        tracing::debug!("Generating {} array of size {}", pattern, size);
        match pattern {
            ArrayPattern::Random => self.random(size),
            ArrayPattern::BestCase => self.best_case(size),
            ArrayPattern::WorstCase => self.worst_case(size),
            ArrayPattern::NearlySorted => self.nearly_sorted(size),
        }
    }

    /// Uniform values in `[MIN_VALUE, MAX_VALUE)`
    pub fn random(&mut self, size: usize) -> Vec<i64> {
        (0..size)
            .map(|_| self.rng.gen_range(MIN_VALUE..MAX_VALUE))
            .collect()
    }

    /// Random values sorted ascending
    pub fn best_case(&mut self, size: usize) -> Vec<i64> {
        let mut array = self.random(size);
        array.sort_unstable();
        array
    }

    /// Random values sorted descending
    pub fn worst_case(&mut self, size: usize) -> Vec<i64> {
        let mut array = self.random(size);
        array.sort_unstable_by(|a, b| b.cmp(a));
        array
    }

    /// Ascending array with `max(1, size / 10)` random index swaps
    ///
    /// Swaps may repeat or cancel, so the result is not guaranteed to be
    /// displaced at all.
    pub fn nearly_sorted(&mut self, size: usize) -> Vec<i64> {
        let mut array = self.best_case(size);
        if size < 2 {
            return array;
        }

        let swaps = (size / 10).max(1);
        for _ in 0..swaps {
            let a = self.rng.gen_range(0..size);
            let b = self.rng.gen_range(0..size);
            array.swap(a, b);
        }
        array
    }
}

impl Default for ArrayGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
