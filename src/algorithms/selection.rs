//! Selection Sort

use crate::session::StepKind;
use crate::types::{SortKey, SortOutcome};

use super::{run_engine, Algorithm};

/// Sort `input` by repeatedly selecting the minimum of the unsorted suffix
pub fn sort<T: SortKey>(input: &[T]) -> SortOutcome<T> {
    run_engine(Algorithm::Selection, input, |array, rec, stats| {
        let n = array.len();
        for i in 0..n - 1 {
            rec.set_iteration(i);
            stats.passes += 1;
            let mut min_index = i;
            rec.record(
                StepKind::Begin,
                array,
                format!(
                    "Start iteration {}: Assume {} at index {} is the minimum.",
                    i + 1,
                    array[i],
                    i
                ),
                &[i],
                &[],
            );

            for j in i + 1..n {
                stats.comparisons += 1;
                rec.record(
                    StepKind::Compare,
                    array,
                    format!(
                        "Compare {} at index {} with current minimum {} at index {}.",
                        array[j], j, array[min_index], min_index
                    ),
                    &[j, min_index],
                    &[],
                );

                if array[j] < array[min_index] {
                    min_index = j;
                    rec.record(
                        StepKind::Select,
                        array,
                        format!("New minimum found: {} at index {}.", array[j], j),
                        &[j],
                        &[],
                    );
                }
            }

            if min_index != i {
                let (current, minimum) = (array[i], array[min_index]);
                array.swap(i, min_index);
                stats.swaps += 1;
                rec.record(
                    StepKind::Swap,
                    array,
                    format!(
                        "Swap {} at index {} with minimum {} at index {}.",
                        current, i, minimum, min_index
                    ),
                    &[],
                    &[i, min_index],
                );
            } else {
                rec.record(
                    StepKind::NoSwap,
                    array,
                    "No swap needed for this iteration.",
                    &[],
                    &[],
                );
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_structure() {
        let outcome = sort(&[3, 1, 2]);
        let kinds: Vec<StepKind> = outcome.steps.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                // i = 0: assume 3, compare 1 (new min), compare 2, swap
                StepKind::Begin,
                StepKind::Compare,
                StepKind::Select,
                StepKind::Compare,
                StepKind::Swap,
                // i = 1: assume 3, compare 2 (new min), swap
                StepKind::Begin,
                StepKind::Compare,
                StepKind::Select,
                StepKind::Swap,
            ]
        );
        assert_eq!(outcome.sorted, vec![1, 2, 3]);
        assert_eq!(outcome.stats.comparisons, 3);
        assert_eq!(outcome.stats.swaps, 2);
    }

    #[test]
    fn test_no_swap_step() {
        let outcome = sort(&[1, 2]);
        let last = outcome.steps.last().unwrap();
        assert_eq!(last.kind, StepKind::NoSwap);
        assert_eq!(last.description, "No swap needed for this iteration.");
        assert_eq!(outcome.stats.swaps, 0);
    }
}
