//! Step recording and playback module
//!
//! This module provides the replay log produced by the sort engines and the
//! controller that plays it back step by step.
//!
//! # Features
//!
//! - Record every comparison and mutation of a sort as a full array snapshot
//! - Play back a recording on a timer with configurable speed
//! - Pause, resume, step forward/backward and jump between iterations
//! - Drive playback from a single async task fed by user commands

pub mod driver;
pub mod player;
pub mod recorder;
pub mod types;

pub use driver::{PlaybackCommand, PlaybackDriver};
pub use player::PlaybackController;
pub use recorder::StepRecorder;
pub use types::{PlaybackState, Step, StepKind, StepSequence};
