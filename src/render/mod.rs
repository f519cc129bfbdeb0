//! Rendering and reporting collaborators
//!
//! The core never formats presentation state itself. Playback hands each
//! newly visible step to a [`StepRenderer`], and run statistics go through
//! [`RunReport`].
//!
//! - [`StepRenderer`] - callback invoked once per visible step
//! - [`TerminalRenderer`] - draws steps as a row of block characters
//! - [`RunReport`] - statistics + complexity summary as text or JSON

pub mod report;
pub mod terminal;

pub use report::{ReportFormat, RunReport};
pub use terminal::TerminalRenderer;

use crate::session::Step;

/// Receives steps as they become visible during playback
#[cfg_attr(test, mockall::automock)]
pub trait StepRenderer {
    /// Draw `step`, which is at position `index` of the loaded sequence
    fn render_step(&mut self, index: usize, step: &Step);

    /// Called once when playback reaches the completed state
    fn playback_finished(&mut self, _total_steps: usize) {}
}

impl<R: StepRenderer + ?Sized> StepRenderer for Box<R> {
    fn render_step(&mut self, index: usize, step: &Step) {
        (**self).render_step(index, step)
    }

    fn playback_finished(&mut self, total_steps: usize) {
        (**self).playback_finished(total_steps)
    }
}

/// Renderer that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl StepRenderer for NullRenderer {
    fn render_step(&mut self, _index: usize, _step: &Step) {}
}
