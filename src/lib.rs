//! # SortVis-RS: Step-Recording Sorting Visualizer
//!
//! A sorting algorithm visualizer core. Each sort engine runs to completion
//! and records every comparison and mutation as a full array snapshot; the
//! resulting step log is then replayed on a timer with pause, single-step
//! and iteration jumps.
//!
//! ## Architecture
//!
//! - **Algorithms**: six instrumented engines (Bubble, Insertion, Selection,
//!   Merge, Quick, Count) that emit a [`StepSequence`]
//! - **Session**: the step recorder, the playback state machine and the
//!   async timer loop that drives it
//! - **Analysis**: array shape classification and algorithm recommendation
//! - **Render**: the per-step renderer callback, a terminal renderer and the
//!   end-of-run report
//!
//! ## Example
//!
//! ```
//! use sortvis_rs::{algorithms::{self, Algorithm}, render::NullRenderer, PlaybackController};
//!
//! let outcome = algorithms::sort(Algorithm::Quick, &[5, 3, 8, 1, 9, 2]).unwrap();
//! assert_eq!(outcome.sorted, vec![1, 2, 3, 5, 8, 9]);
//!
//! let mut controller = PlaybackController::new(NullRenderer);
//! controller.load(outcome.steps).unwrap();
//! while controller.step_forward() {}
//! assert!(!controller.can_step_forward());
//! ```

pub mod algorithms;
pub mod analysis;
pub mod config;
pub mod error;
pub mod generator;
pub mod input;
pub mod render;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use algorithms::{sort, sort_by_name, Algorithm};
pub use analysis::{classify, Classification};
pub use config::{PlaybackSpeed, VisualizerConfig};
pub use error::{Result, SortVisError};
pub use generator::{ArrayGenerator, ArrayPattern};
pub use render::StepRenderer;
pub use session::{PlaybackController, PlaybackState, Step, StepKind, StepSequence};
pub use types::{RunStatistics, SortOutcome};
