//! Test data builders for creating test objects

use sortvis_rs::session::{StepKind, StepRecorder, StepSequence};

/// Builder for hand-made step sequences
///
/// Each step snapshots the same two-element array; only kinds and iterations
/// vary.
pub struct SequenceBuilder {
    recorder: StepRecorder,
    iteration: usize,
}

impl SequenceBuilder {
    pub fn new() -> Self {
        Self {
            recorder: StepRecorder::new(),
            iteration: 0,
        }
    }

    /// Start a new iteration group
    pub fn iteration(mut self, iteration: usize) -> Self {
        self.iteration = iteration;
        self
    }

    /// Append `count` compare steps to the current iteration
    pub fn compares(mut self, count: usize) -> Self {
        self.recorder.set_iteration(self.iteration);
        for _ in 0..count {
            let n = self.recorder.len();
            self.recorder.record(
                StepKind::Compare,
                &[2, 1],
                format!("step {}", n),
                &[0, 1],
                &[],
            );
        }
        self
    }

    pub fn build(self) -> StepSequence {
        self.recorder.finish()
    }
}

impl Default for SequenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_builder() {
        let sequence = SequenceBuilder::new()
            .compares(2)
            .iteration(1)
            .compares(3)
            .build();

        assert_eq!(sequence.len(), 5);
        assert_eq!(sequence.first_step_of_iteration(1), Some(2));
    }
}
