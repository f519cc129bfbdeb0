//! Run summary reporting
//!
//! Replaces writing statistics straight into result displays: a
//! [`RunReport`] is built from a finished run and rendered as text or JSON.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::algorithms::{Algorithm, AlgorithmInfo};
use crate::error::Result;
use crate::types::{RunStatistics, SortOutcome};

/// Output format for run reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Summary of one sort run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub input_len: usize,
    pub step_count: usize,
    pub iteration_count: usize,
    pub stats: RunStatistics,
    pub info: AlgorithmInfo,
}

impl RunReport {
    /// Build a report from a finished run
    pub fn new(algorithm: Algorithm, outcome: &SortOutcome) -> Self {
        Self {
            algorithm,
            input_len: outcome.sorted.len(),
            step_count: outcome.steps.len(),
            iteration_count: outcome.steps.iteration_count(),
            stats: outcome.stats,
            info: algorithm.info(),
        }
    }

    /// Render in the requested format
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_text()),
            ReportFormat::Json => self.to_json(),
        }
    }

    /// Pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human readable summary
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(text, "{} ({} elements)", self.algorithm, self.input_len);
        let _ = writeln!(
            text,
            "Steps: {} across {} iterations",
            self.step_count, self.iteration_count
        );
        match self.algorithm {
            Algorithm::Merge => {
                let _ = writeln!(text, "Total Merges: {}", self.stats.merges);
            }
            _ => {
                let _ = writeln!(text, "Total Swaps: {}", self.stats.swaps);
            }
        }
        if self.algorithm.is_comparison_sort() {
            let _ = writeln!(
                text,
                "Comparisons: {}, Outer Passes: {}",
                self.stats.comparisons, self.stats.passes
            );
        } else {
            let _ = writeln!(text, "Outer Passes: {}", self.stats.passes);
        }
        let _ = writeln!(
            text,
            "Time Complexity: best {}, average {}, worst {}",
            self.info.best_case, self.info.average_case, self.info.worst_case
        );
        let _ = writeln!(text, "Space Complexity: {}", self.info.space);
        let _ = write!(text, "Execution Time: {:.2} ms", self.stats.duration_ms());
        text
    }
}
