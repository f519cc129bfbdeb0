//! Quick Sort with Lomuto partitioning

use crate::session::{StepKind, StepRecorder};
use crate::types::{RunStatistics, SortKey, SortOutcome};

use super::{run_engine, Algorithm};

/// Sort `input` using the last element of each range as pivot
///
/// Each partition call records the pivot choice, one compare per scanned
/// element, one swap per element `<= pivot` and the final pivot placement.
/// Recursion continues on `[low, p - 1]` and `[p + 1, high]`.
pub fn sort<T: SortKey>(input: &[T]) -> SortOutcome<T> {
    run_engine(Algorithm::Quick, input, |array, rec, stats| {
        let high = array.len() - 1;
        let mut run = QuickRun {
            rec,
            stats,
            partitions: 0,
        };
        run.sort_range(array, 0, high);
    })
}

struct QuickRun<'a, T> {
    rec: &'a mut StepRecorder<T>,
    stats: &'a mut RunStatistics,
    /// Ordinal of the next partition call, used as its iteration tag
    partitions: usize,
}

impl<T: SortKey> QuickRun<'_, T> {
    fn sort_range(&mut self, array: &mut [T], low: usize, high: usize) {
        if low >= high {
            return;
        }

        let pivot_index = self.partition(array, low, high);
        if pivot_index > low {
            self.sort_range(array, low, pivot_index - 1);
        }
        self.sort_range(array, pivot_index + 1, high);
    }

    fn partition(&mut self, array: &mut [T], low: usize, high: usize) -> usize {
        self.rec.set_iteration(self.partitions);
        self.partitions += 1;
        self.stats.passes += 1;

        let pivot = array[high];
        self.rec.record(
            StepKind::Begin,
            array,
            format!("Choose pivot: {} at index {}", pivot, high),
            &[high],
            &[],
        );

        // Everything left of `boundary` is <= pivot
        let mut boundary = low;
        for j in low..high {
            self.stats.comparisons += 1;
            self.rec.record(
                StepKind::Compare,
                array,
                format!("Compare {} with pivot {}", array[j], pivot),
                &[j, high],
                &[],
            );

            if array[j] <= pivot {
                let (moved, displaced) = (array[j], array[boundary]);
                array.swap(boundary, j);
                self.stats.swaps += 1;
                let pair = [boundary, j];
                self.rec.record(
                    StepKind::Swap,
                    array,
                    format!(
                        "Swap {} at index {} with {} at index {}",
                        moved, j, displaced, boundary
                    ),
                    index_set(&pair),
                    index_set(&pair),
                );
                boundary += 1;
            }
        }

        array.swap(boundary, high);
        self.stats.swaps += 1;
        let pair = [boundary, high];
        self.rec.record(
            StepKind::PivotPlaced,
            array,
            format!(
                "Move pivot {} to correct position at index {}",
                pivot, boundary
            ),
            index_set(&pair),
            index_set(&pair),
        );

        boundary
    }
}

/// Both indexes, or one when they name the same slot
fn index_set(pair: &[usize; 2]) -> &[usize] {
    if pair[0] == pair[1] {
        &pair[..1]
    } else {
        pair
    }
}
