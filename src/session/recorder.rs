//! Step recorder used by the instrumented sort engines

use crate::types::SortKey;

use super::types::{Step, StepKind, StepSequence};

/// Append-only builder for a [`StepSequence`]
///
/// Every engine owns one recorder for the duration of a run and hands the
/// finished sequence back through [`StepRecorder::finish`]. The recorder
/// pins the snapshot length to the first recorded step.
#[derive(Debug)]
pub struct StepRecorder<T = i64> {
    steps: Vec<Step<T>>,
    /// Iteration tag applied by [`StepRecorder::record`]
    iteration: usize,
    array_len: Option<usize>,
}

impl<T: SortKey> Default for StepRecorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SortKey> StepRecorder<T> {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            iteration: 0,
            array_len: None,
        }
    }

    /// Create with room for `capacity` steps
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Set the iteration tag for subsequent steps
    pub fn set_iteration(&mut self, iteration: usize) {
        self.iteration = iteration;
    }

    /// Number of steps recorded so far
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Append a fully built step
    pub fn push(&mut self, step: Step<T>) {
        let len = *self.array_len.get_or_insert(step.array_state.len());
        debug_assert_eq!(
            step.array_state.len(),
            len,
            "snapshot length changed mid-run"
        );
        self.steps.push(step);
    }

    /// Snapshot `array` under the current iteration tag
    pub fn record(
        &mut self,
        kind: StepKind,
        array: &[T],
        description: impl Into<String>,
        highlight: &[usize],
        swap: &[usize],
    ) {
        let step = Step::new(kind, array, description)
            .with_iteration(self.iteration)
            .with_highlight(highlight)
            .with_swap(swap);
        self.push(step);
    }

    /// Consume the recorder
    pub fn finish(self) -> StepSequence<T> {
        StepSequence::from_steps(self.steps)
    }
}
