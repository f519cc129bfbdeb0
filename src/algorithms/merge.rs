//! Top-down Merge Sort

use crate::session::{StepKind, StepRecorder};
use crate::types::{RunStatistics, SortKey, SortOutcome};

use super::{format_values, run_engine, Algorithm};

/// Sort `input` by recursive halving at `floor((left + right) / 2)`
///
/// Every merge records a `Begin` step, one `Compare` per element pair
/// consumed and a `Merged` step. Compare steps snapshot the array as it was
/// before the merge; the merged run is written back in one go, so the
/// highlighted indices always point at the compared values. Single-element
/// ranges record nothing.
pub fn sort<T: SortKey>(input: &[T]) -> SortOutcome<T> {
    run_engine(Algorithm::Merge, input, |array, rec, stats| {
        let right = array.len() - 1;
        let mut run = MergeRun {
            rec,
            stats,
            merges: 0,
        };
        run.sort_range(array, 0, right);
    })
}

struct MergeRun<'a, T> {
    rec: &'a mut StepRecorder<T>,
    stats: &'a mut RunStatistics,
    /// Ordinal of the next merge call, used as its iteration tag
    merges: usize,
}

impl<T: SortKey> MergeRun<'_, T> {
    fn sort_range(&mut self, array: &mut [T], left: usize, right: usize) {
        if left >= right {
            return;
        }

        let mid = left + (right - left) / 2;
        self.sort_range(array, left, mid);
        self.sort_range(array, mid + 1, right);
        self.merge(array, left, mid, right);
    }

    fn merge(&mut self, array: &mut [T], left: usize, mid: usize, right: usize) {
        self.rec.set_iteration(self.merges);
        self.merges += 1;
        self.stats.merges += 1;
        self.stats.passes += 1;

        let left_run = &array[left..=mid];
        let right_run = &array[mid + 1..=right];
        self.rec.record(
            StepKind::Begin,
            array,
            format!(
                "Merge two sorted subarrays: {} and {}",
                format_values(left_run),
                format_values(right_run)
            ),
            &[left, right],
            &[],
        );

        let mut merged = Vec::with_capacity(right - left + 1);
        let (mut i, mut j) = (0, 0);
        while i < left_run.len() && j < right_run.len() {
            self.stats.comparisons += 1;
            self.rec.record(
                StepKind::Compare,
                array,
                format!("Compare {} (left) and {} (right).", left_run[i], right_run[j]),
                &[left + i, mid + 1 + j],
                &[],
            );

            // Ties take from the left run, which keeps the sort stable
            if left_run[i] <= right_run[j] {
                merged.push(left_run[i]);
                i += 1;
            } else {
                merged.push(right_run[j]);
                j += 1;
            }
        }
        merged.extend_from_slice(&left_run[i..]);
        merged.extend_from_slice(&right_run[j..]);

        array[left..=right].copy_from_slice(&merged);
        self.rec.record(
            StepKind::Merged,
            array,
            format!("Merged subarrays into: {}", format_values(&merged)),
            &[left, right],
            &[],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_elements() {
        let outcome = sort(&[2, 1]);
        let steps = outcome.steps.as_slice();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].kind, StepKind::Begin);
        assert_eq!(steps[0].description, "Merge two sorted subarrays: [2] and [1]");
        assert_eq!(steps[1].kind, StepKind::Compare);
        assert_eq!(steps[1].highlight_indexes, vec![0, 1]);
        assert_eq!(steps[2].kind, StepKind::Merged);
        assert_eq!(steps[2].array_state, vec![1, 2]);
        assert_eq!(steps[2].description, "Merged subarrays into: [1, 2]");
    }

    #[test]
    fn test_iteration_is_merge_ordinal() {
        // Merges: [0,1], [0,2], [3,4], [0,4]
        let outcome = sort(&[5, 4, 3, 2, 1]);
        assert_eq!(outcome.stats.merges, 4);
        assert_eq!(outcome.steps.iteration_count(), 4);
        let begins: Vec<usize> = outcome
            .steps
            .steps_of_kind(StepKind::Begin)
            .map(|s| s.iteration)
            .collect();
        assert_eq!(begins, vec![0, 1, 2, 3]);
        assert_eq!(outcome.sorted, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_compare_snapshots_are_pre_merge() {
        let outcome = sort(&[1, 3, 2, 4]);
        for step in outcome.steps.steps_of_kind(StepKind::Compare) {
            let mut sorted = step.array_state.clone();
            sorted.sort();
            assert_eq!(sorted, vec![1, 2, 3, 4]);
        }
    }
}
