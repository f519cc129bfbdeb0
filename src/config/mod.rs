//! Configuration module for SortVis-RS
//!
//! This module handles run configuration:
//! - Which algorithm to visualize and on what input
//! - Playback speed (slider value mapped to a tick interval)
//! - Classifier thresholds and report output
//!
//! # Config File
//!
//! Configuration is a TOML file. Every field is optional:
//!
//! ```toml
//! algorithm = "quick"
//! array = "5, 3, 8, 1, 9, 2"
//! array_size = 20
//! pattern = "nearly_sorted"
//! speed = 800
//! seed = 42
//! report_format = "json"
//! interactive = false
//! priority = "stability"
//!
//! [classifier]
//! nearly_sorted_ratio = 0.1
//! metric = "stable_rank"
//! ```
//!
//! When `array` is set it is sorted as given and `array_size`, `pattern` and
//! `seed` are ignored.
//!
//! The path is taken from the first command-line argument, or from the
//! `SORTVIS_CONFIG` environment variable.

pub mod settings;

pub use settings::*;

use crate::algorithms::Algorithm;
use crate::analysis::{ClassifierConfig, Priority};
use crate::error::{Result, ResultExt, SortVisError};
use crate::generator::ArrayPattern;
use crate::input::parse_array;
use crate::render::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding a config file path
pub const CONFIG_ENV_VAR: &str = "SORTVIS_CONFIG";

/// Smallest generated array
pub const MIN_ARRAY_SIZE: usize = 5;

/// Largest generated array
pub const MAX_ARRAY_SIZE: usize = 100;

/// Default generated array size
pub const DEFAULT_ARRAY_SIZE: usize = 20;

/// Visualizer run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Algorithm to run
    pub algorithm: Algorithm,

    /// Comma-separated input array; generated when unset
    pub array: Option<String>,

    /// Number of generated elements
    pub array_size: usize,

    /// Shape of the generated array
    pub pattern: ArrayPattern,

    /// Playback speed slider value
    pub speed: PlaybackSpeed,

    /// Generator seed; entropy when unset
    pub seed: Option<u64>,

    /// Output format of the final report
    pub report_format: ReportFormat,

    /// Read playback commands from stdin
    pub interactive: bool,

    /// What the algorithm recommendation optimizes for
    pub priority: Priority,

    /// Classifier settings
    pub classifier: ClassifierConfig,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            array: None,
            array_size: DEFAULT_ARRAY_SIZE,
            pattern: ArrayPattern::default(),
            speed: PlaybackSpeed::default(),
            seed: None,
            report_format: ReportFormat::default(),
            interactive: false,
            priority: Priority::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl VisualizerConfig {
    /// Parse and validate TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| SortVisError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SortVisError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_toml_str(&content).with_context(|| format!("Invalid config file {:?}", path))
    }

    /// Load a config file, returning defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Resolve the config path from an explicit argument or the environment
    pub fn resolve_path(arg: Option<String>) -> Option<PathBuf> {
        arg.or_else(|| std::env::var(CONFIG_ENV_VAR).ok())
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Parse the configured input array, if any
    pub fn input_array(&self) -> Result<Option<Vec<i64>>> {
        self.array
            .as_deref()
            .map(|text| parse_array(text).context("array"))
            .transpose()
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| SortVisError::Serialization(format!("Failed to serialize config: {}", e)))
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&self.array_size) {
            return Err(SortVisError::Config(format!(
                "array_size must be between {} and {}, got {}",
                MIN_ARRAY_SIZE, MAX_ARRAY_SIZE, self.array_size
            )));
        }

        if !PlaybackSpeed::is_valid(self.speed.value()) {
            return Err(SortVisError::Config(format!(
                "speed must be between {} and {}, got {}",
                MIN_SPEED,
                MAX_SPEED,
                self.speed.value()
            )));
        }

        self.input_array()?;

        let ratio = self.classifier.nearly_sorted_ratio;
        if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
            return Err(SortVisError::Config(format!(
                "classifier.nearly_sorted_ratio must be in (0, 1], got {}",
                ratio
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::DisplacementMetric;

    #[test]
    fn test_default_config_is_valid() {
        let config = VisualizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.algorithm, Algorithm::Bubble);
        assert_eq!(config.speed.value(), DEFAULT_SPEED);
    }

    #[test]
    fn test_partial_toml() {
        let config = VisualizerConfig::from_toml_str(
            r#"
            algorithm = "merge"
            speed = 900
            [classifier]
            metric = "first_occurrence"
            "#,
        )
        .unwrap();

        assert_eq!(config.algorithm, Algorithm::Merge);
        assert_eq!(config.speed.value(), 900);
        assert_eq!(config.array_size, DEFAULT_ARRAY_SIZE);
        assert_eq!(config.classifier.metric, DisplacementMetric::FirstOccurrence);
        assert_eq!(config.classifier.nearly_sorted_ratio, 0.1);
    }

    #[test]
    fn test_out_of_range_values() {
        for toml in ["array_size = 4", "array_size = 101", "speed = 991"] {
            let err = VisualizerConfig::from_toml_str(toml).unwrap_err();
            assert!(matches!(err, SortVisError::Config(_)), "{}", toml);
        }

        let err = VisualizerConfig::from_toml_str("[classifier]\nnearly_sorted_ratio = 0.0")
            .unwrap_err();
        assert!(matches!(err, SortVisError::Config(_)));
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        assert!(VisualizerConfig::from_toml_str("algorithm = \"heap\"").is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = VisualizerConfig {
            algorithm: Algorithm::Count,
            array: Some("3, 1, 2".to_string()),
            priority: Priority::Stability,
            seed: Some(9),
            ..Default::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(VisualizerConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_input_array() {
        let config = VisualizerConfig::from_toml_str("array = \"5, 3, 8\"").unwrap();
        assert_eq!(config.input_array().unwrap(), Some(vec![5, 3, 8]));
        assert_eq!(VisualizerConfig::default().input_array().unwrap(), None);
    }

    #[test]
    fn test_bad_input_array_rejected() {
        for toml in ["array = \"1, NaN\"", "array = \"a,b\"", "array = \"\"", "array = \"1.5\""] {
            let err = VisualizerConfig::from_toml_str(toml).unwrap_err();
            assert!(err.is_invalid_input(), "{}", toml);
            assert!(err.to_string().starts_with("array: "), "{}", err);
        }
    }

    #[test]
    fn test_resolve_path_prefers_argument() {
        let path = VisualizerConfig::resolve_path(Some("run.toml".to_string()));
        assert_eq!(path, Some(PathBuf::from("run.toml")));
    }
}
