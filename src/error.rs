//! Error handling for SortVis-RS
//!
//! This module defines custom error types and a Result alias for use
//! throughout the crate.

use thiserror::Error;

/// Main error type for SortVis-RS operations
#[derive(Error, Debug)]
pub enum SortVisError {
    /// Input that cannot be sorted or classified (non-numeric, NaN, empty, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Negative value handed to an engine that only accepts non-negative integers
    #[error("Invalid input: negative value {value} at index {index} (Count Sort requires values >= 0)")]
    NegativeValue { index: usize, value: i64 },

    /// Input longer than the engines are willing to snapshot
    #[error("Invalid input: {len} elements exceeds the maximum of {max}")]
    InputTooLarge { len: usize, max: usize },

    /// Unknown algorithm name
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Errors related to playback control
    #[error("Playback error: {0}")]
    Playback(String),

    /// Errors related to configuration loading/validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<SortVisError>,
    },
}

impl SortVisError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        SortVisError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error rejects caller-supplied input
    pub fn is_invalid_input(&self) -> bool {
        match self {
            SortVisError::InvalidInput(_)
            | SortVisError::NegativeValue { .. }
            | SortVisError::InputTooLarge { .. } => true,
            SortVisError::WithContext { source, .. } => source.is_invalid_input(),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for SortVisError {
    fn from(err: serde_json::Error) -> Self {
        SortVisError::Serialization(err.to_string())
    }
}

/// Result type alias for SortVis-RS operations
pub type Result<T> = std::result::Result<T, SortVisError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SortVisError::InvalidInput("Please enter a valid array of numbers".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid input: Please enter a valid array of numbers"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = SortVisError::UnsupportedAlgorithm("Bogo Sort".to_string());
        let with_ctx = err.with_context("Failed to start visualization");
        assert!(with_ctx.to_string().contains("Failed to start visualization"));
        assert!(with_ctx.to_string().contains("Bogo Sort"));
    }

    #[test]
    fn test_result_ext_wraps_errors() {
        let failed: Result<()> = Err(SortVisError::InvalidInput("entry 2 is empty".to_string()));
        let err = failed.context("array").unwrap_err();
        assert_eq!(err.to_string(), "array: Invalid input: entry 2 is empty");
        assert!(err.is_invalid_input());

        let ok: Result<u8> = Ok(3);
        assert_eq!(ok.with_context(|| unreachable!()).unwrap(), 3);
    }

    #[test]
    fn test_negative_value_error() {
        let err = SortVisError::NegativeValue {
            index: 0,
            value: -1,
        };
        assert!(err.to_string().contains("-1"));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_invalid_input_grouping() {
        assert!(SortVisError::InputTooLarge { len: 500, max: 128 }.is_invalid_input());
        assert!(SortVisError::InvalidInput("x".into())
            .with_context("sorting")
            .is_invalid_input());
        assert!(!SortVisError::UnsupportedAlgorithm("x".into()).is_invalid_input());
        assert!(!SortVisError::Config("x".into()).is_invalid_input());
    }
}
