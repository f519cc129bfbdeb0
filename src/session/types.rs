//! Step log and playback state types

use serde::{Deserialize, Serialize};

use crate::types::SortKey;

/// State of the playback controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No step sequence loaded
    #[default]
    Idle,
    /// Sequence loaded, not running
    Ready,
    /// Timer-driven auto-advance
    Running,
    /// Auto-advance suspended, index retained
    Paused,
    /// The last step has been reached
    Completed,
}

impl PlaybackState {
    /// Check if auto-advancing
    pub fn is_running(&self) -> bool {
        matches!(self, PlaybackState::Running)
    }

    /// Check if paused
    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused)
    }

    /// Check if a sequence is loaded
    pub fn has_sequence(&self) -> bool {
        !matches!(self, PlaybackState::Idle)
    }

    /// Display name for the state
    pub fn display_name(&self) -> &'static str {
        match self {
            PlaybackState::Idle => "Idle",
            PlaybackState::Ready => "Ready",
            PlaybackState::Running => "Running",
            PlaybackState::Paused => "Paused",
            PlaybackState::Completed => "Completed",
        }
    }
}

/// What a recorded step shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    /// Start of a unit of work: insertion key, assumed minimum, merge, pivot choice
    Begin,
    /// Two elements are compared
    Compare,
    /// Two elements were exchanged
    Swap,
    /// An element was shifted one slot to the right
    Shift,
    /// A new minimum was selected
    Select,
    /// An element was written to its destination
    Place,
    /// Selection pass finished without a swap
    NoSwap,
    /// Two runs were merged back into the array
    Merged,
    /// The pivot was swapped into its final slot
    PivotPlaced,
    /// Counting bookkeeping finished (occurrences or prefix sums)
    Tally,
    /// The array is sorted
    Done,
}

impl StepKind {
    /// Whether a step of this kind changed the array
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            StepKind::Swap
                | StepKind::Shift
                | StepKind::Place
                | StepKind::Merged
                | StepKind::PivotPlaced
        )
    }
}

/// One recorded instant of a sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step<T = i64> {
    /// What happened at this step
    pub kind: StepKind,
    /// Full snapshot of the array at this instant
    pub array_state: Vec<T>,
    /// Human readable narration
    pub description: String,
    /// Outer pass or recursive call this step belongs to
    pub iteration: usize,
    /// Indices being compared or inspected (0 to 2)
    pub highlight_indexes: Vec<usize>,
    /// Indices that were just mutated (0 to 2)
    pub swap_indexes: Vec<usize>,
}

impl<T: SortKey> Step<T> {
    /// Snapshot `array` with a description
    pub fn new(kind: StepKind, array: &[T], description: impl Into<String>) -> Self {
        Self {
            kind,
            array_state: array.to_vec(),
            description: description.into(),
            iteration: 0,
            highlight_indexes: Vec::new(),
            swap_indexes: Vec::new(),
        }
    }

    /// Tag the step with an iteration
    pub fn with_iteration(mut self, iteration: usize) -> Self {
        self.iteration = iteration;
        self
    }

    /// Set the highlighted indices
    pub fn with_highlight(mut self, indexes: &[usize]) -> Self {
        self.highlight_indexes = indexes.to_vec();
        self
    }

    /// Set the mutated indices
    pub fn with_swap(mut self, indexes: &[usize]) -> Self {
        self.swap_indexes = indexes.to_vec();
        self
    }

    /// The index a renderer should mark as "current", if any
    pub fn cursor(&self) -> Option<usize> {
        self.highlight_indexes.first().copied()
    }
}

/// Complete ordered recording of one sort run
///
/// Immutable once built; only [`super::StepRecorder`] appends to it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StepSequence<T = i64> {
    steps: Vec<Step<T>>,
}

impl<T: SortKey> StepSequence<T> {
    pub(crate) fn from_steps(steps: Vec<Step<T>>) -> Self {
        Self { steps }
    }

    /// An empty sequence
    pub fn empty() -> Self {
        Self { steps: Vec::new() }
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if there are no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`
    pub fn get(&self, index: usize) -> Option<&Step<T>> {
        self.steps.get(index)
    }

    /// Final step
    pub fn last(&self) -> Option<&Step<T>> {
        self.steps.last()
    }

    /// Iterate over the steps in order
    pub fn iter(&self) -> std::slice::Iter<'_, Step<T>> {
        self.steps.iter()
    }

    /// All steps as a slice
    pub fn as_slice(&self) -> &[Step<T>] {
        &self.steps
    }

    /// Length of every snapshot (0 when empty)
    pub fn array_len(&self) -> usize {
        self.steps.first().map(|s| s.array_state.len()).unwrap_or(0)
    }

    /// Index of the first step tagged with `iteration`
    pub fn first_step_of_iteration(&self, iteration: usize) -> Option<usize> {
        self.steps.iter().position(|s| s.iteration == iteration)
    }

    /// Number of distinct iterations (highest tag + 1)
    pub fn iteration_count(&self) -> usize {
        self.steps
            .iter()
            .map(|s| s.iteration + 1)
            .max()
            .unwrap_or(0)
    }

    /// Steps of a given kind
    pub fn steps_of_kind(&self, kind: StepKind) -> impl Iterator<Item = &Step<T>> {
        self.steps.iter().filter(move |s| s.kind == kind)
    }
}

impl<'a, T> IntoIterator for &'a StepSequence<T> {
    type Item = &'a Step<T>;
    type IntoIter = std::slice::Iter<'a, Step<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
