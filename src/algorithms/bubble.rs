//! Bubble Sort with early exit

use crate::session::StepKind;
use crate::types::{SortKey, SortOutcome};

use super::{run_engine, Algorithm};

/// Sort `input`, recording a compare step for every adjacent pair and a swap
/// step right after each compare that triggers one
///
/// Stops after the first pass that performs no swap.
pub fn sort<T: SortKey>(input: &[T]) -> SortOutcome<T> {
    run_engine(Algorithm::Bubble, input, |array, rec, stats| {
        let n = array.len();
        for i in 0..n - 1 {
            rec.set_iteration(i);
            stats.passes += 1;
            let mut swapped = false;

            for j in 0..n - 1 - i {
                stats.comparisons += 1;
                rec.record(
                    StepKind::Compare,
                    array,
                    format!("Compare element {} with element {}", array[j], array[j + 1]),
                    &[j, j + 1],
                    &[],
                );

                if array[j] > array[j + 1] {
                    let (larger, smaller) = (array[j], array[j + 1]);
                    array.swap(j, j + 1);
                    stats.swaps += 1;
                    swapped = true;
                    rec.record(
                        StepKind::Swap,
                        array,
                        format!("Swap element {} with element {}", larger, smaller),
                        &[],
                        &[j, j + 1],
                    );
                }
            }

            if !swapped {
                break;
            }
        }
    })
}
