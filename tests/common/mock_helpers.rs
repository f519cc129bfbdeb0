//! Renderer doubles for playback tests

use sortvis_rs::{Step, StepRenderer};

/// Renderer that records which steps were drawn
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub rendered: Vec<usize>,
    pub descriptions: Vec<String>,
    pub finished_with: Option<usize>,
}

impl StepRenderer for RecordingRenderer {
    fn render_step(&mut self, index: usize, step: &Step) {
        self.rendered.push(index);
        self.descriptions.push(step.description.clone());
    }

    fn playback_finished(&mut self, total_steps: usize) {
        self.finished_with = Some(total_steps);
    }
}
