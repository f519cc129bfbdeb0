//! Count Sort for non-negative integers

use crate::error::{Result, SortVisError};
use crate::session::StepKind;
use crate::types::SortOutcome;

use super::{format_values, run_engine, Algorithm};

/// Largest value Count Sort accepts; bounds the frequency table
pub const MAX_COUNT_VALUE: i64 = 1_000_000;

/// Sort `input` with a frequency table sized `max + 1`
///
/// Records one step when counting completes, one after the prefix sums, one
/// per placement (right to left, written into the working array so the
/// placement is visible) and a final `Done` step. Every step is tagged
/// iteration 0: there is a single pass and no natural grouping.
///
/// Fails with [`SortVisError::NegativeValue`] or
/// [`SortVisError::InvalidInput`] before recording anything when a value is
/// outside `0..=MAX_COUNT_VALUE`.
pub fn sort(input: &[i64]) -> Result<SortOutcome> {
    validate(input)?;

    Ok(run_engine(Algorithm::Count, input, |array, rec, stats| {
        stats.passes = 1;
        let max = array.iter().copied().max().unwrap_or(0) as usize;

        let mut count = vec![0usize; max + 1];
        for &value in array.iter() {
            count[value as usize] += 1;
        }
        rec.record(
            StepKind::Tally,
            array,
            "Count the occurrences of each element.",
            &[],
            &[],
        );

        for i in 1..=max {
            count[i] += count[i - 1];
        }
        rec.record(
            StepKind::Tally,
            array,
            "Accumulate counts in the count array.",
            &[],
            &[],
        );

        let source = array.to_vec();
        for (i, &value) in source.iter().enumerate().rev() {
            let slot = &mut count[value as usize];
            *slot -= 1;
            let position = *slot;
            array[position] = value;
            stats.swaps += 1;
            rec.record(
                StepKind::Place,
                array,
                format!("Place {} in the sorted position {}", value, position),
                &[i, position],
                &[position],
            );
        }

        rec.record(
            StepKind::Done,
            array,
            format!("Final sorted array: {}", format_values(array)),
            &[],
            &[],
        );
    }))
}

fn validate(input: &[i64]) -> Result<()> {
    for (index, &value) in input.iter().enumerate() {
        if value < 0 {
            tracing::warn!("Count Sort rejected negative value {} at index {}", value, index);
            return Err(SortVisError::NegativeValue { index, value });
        }
        if value > MAX_COUNT_VALUE {
            tracing::warn!("Count Sort rejected value {} at index {}", value, index);
            return Err(SortVisError::InvalidInput(format!(
                "value {} at index {} exceeds the Count Sort maximum of {}",
                value, index, MAX_COUNT_VALUE
            )));
        }
    }
    Ok(())
}
