//! Insertion Sort

use crate::session::StepKind;
use crate::types::{SortKey, SortOutcome};

use super::{run_engine, Algorithm};

/// Sort `input` by growing a sorted prefix
///
/// For every position `i` from 1 this records a `Begin` step, a
/// compare/shift pair per backward move of the key, the compare that stops
/// the scan (if the key did not reach the front), and a final `Place` step.
/// The key travels by adjacent swaps, so every snapshot is a permutation of
/// the input.
pub fn sort<T: SortKey>(input: &[T]) -> SortOutcome<T> {
    run_engine(Algorithm::Insertion, input, |array, rec, stats| {
        for i in 1..array.len() {
            rec.set_iteration(i);
            stats.passes += 1;
            let key = array[i];
            rec.record(
                StepKind::Begin,
                array,
                format!("Start insertion of {} at position {}", key, i),
                &[i],
                &[],
            );

            let mut j = i;
            while j > 0 {
                stats.comparisons += 1;
                rec.record(
                    StepKind::Compare,
                    array,
                    format!("Compare {} with {}", array[j - 1], key),
                    &[j - 1, j],
                    &[],
                );
                // Only strictly greater elements move past the key
                if array[j - 1] <= key {
                    break;
                }

                array.swap(j - 1, j);
                stats.swaps += 1;
                rec.record(
                    StepKind::Shift,
                    array,
                    format!("Move {} to position {}", array[j], j),
                    &[j - 1, j],
                    &[j],
                );
                j -= 1;
            }

            rec.record(
                StepKind::Place,
                array,
                format!("Place {} at position {}", key, j),
                &[j],
                &[],
            );
        }
    })
}
