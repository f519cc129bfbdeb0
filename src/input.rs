//! Boundary validation for user-supplied arrays
//!
//! User input arrives as comma-separated text. Anything that is not a finite
//! integer halts the operation: no element is skipped or coerced.

use crate::error::{Result, SortVisError};

/// Parse `"5, 3, 8"` into integers
///
/// Rejects empty text, empty entries (`"1,,2"`), non-numeric entries,
/// `NaN`/infinite values and fractional values.
pub fn parse_array(text: &str) -> Result<Vec<i64>> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SortVisError::InvalidInput(
            "Please enter a non-empty array".to_string(),
        ));
    }

    text.split(',')
        .enumerate()
        .map(|(index, token)| parse_value(index, token.trim()))
        .collect()
}

fn parse_value(index: usize, token: &str) -> Result<i64> {
    if token.is_empty() {
        return Err(SortVisError::InvalidInput(format!(
            "entry {} is empty",
            index + 1
        )));
    }

    if let Ok(value) = token.parse::<i64>() {
        return Ok(value);
    }

    // Accept integral floats such as "3.0" or "1e2"
    let value = token.parse::<f64>().map_err(|_| {
        SortVisError::InvalidInput(format!("entry {} ({:?}) is not a number", index + 1, token))
    })?;
    from_f64(index, value)
}

fn from_f64(index: usize, value: f64) -> Result<i64> {
    if !value.is_finite() {
        return Err(SortVisError::InvalidInput(format!(
            "entry {} is not a finite number ({})",
            index + 1,
            value
        )));
    }
    if value.fract() != 0.0 {
        return Err(SortVisError::InvalidInput(format!(
            "entry {} ({}) is not an integer",
            index + 1,
            value
        )));
    }
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(SortVisError::InvalidInput(format!(
            "entry {} ({}) is out of range",
            index + 1,
            value
        )));
    }
    Ok(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array() {
        assert_eq!(parse_array("5,3,8").unwrap(), vec![5, 3, 8]);
        assert_eq!(parse_array("  5 , -3 ,8  ").unwrap(), vec![5, -3, 8]);
        assert_eq!(parse_array("42").unwrap(), vec![42]);
        assert_eq!(parse_array("3.0, 1e2").unwrap(), vec![3, 100]);
    }

    #[test]
    fn test_rejects_bad_entries() {
        for text in ["", "   ", "1,,2", "1,2,", "a,b", "1, NaN", "inf", "1.5", "1e30"] {
            let err = parse_array(text).unwrap_err();
            assert!(err.is_invalid_input(), "{:?} should be rejected", text);
        }
    }
}
