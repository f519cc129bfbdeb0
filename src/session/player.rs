//! Playback controller for replaying recorded step sequences

use crate::config::PlaybackSpeed;
use crate::error::{Result, SortVisError};
use crate::render::StepRenderer;

use super::types::{PlaybackState, Step, StepSequence};

/// State machine over a loaded [`StepSequence`]
///
/// The controller never sleeps: a driver (see [`super::PlaybackDriver`])
/// calls [`PlaybackController::advance`] once per tick while
/// [`PlaybackController::is_running`] holds, waiting
/// [`PlaybackController::tick_interval`] between ticks.
///
/// The renderer sees each step at most once per visit: a step is drawn when
/// it becomes the current step, never twice in a row.
#[derive(Debug)]
pub struct PlaybackController<R> {
    /// Current playback state
    state: PlaybackState,
    /// The sequence being played
    sequence: Option<StepSequence>,
    /// Position into the sequence, always `< sequence.len()`
    current_index: usize,
    /// Index most recently handed to the renderer
    last_rendered: Option<usize>,
    /// Playback speed (slider value)
    speed: PlaybackSpeed,
    renderer: R,
}

impl<R: StepRenderer> PlaybackController<R> {
    /// Create an idle controller
    pub fn new(renderer: R) -> Self {
        Self::with_speed(renderer, PlaybackSpeed::default())
    }

    /// Create an idle controller with a speed
    pub fn with_speed(renderer: R, speed: PlaybackSpeed) -> Self {
        Self {
            state: PlaybackState::Idle,
            sequence: None,
            current_index: 0,
            last_rendered: None,
            speed,
            renderer,
        }
    }

    /// Get current state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Check if auto-advancing
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Check if paused
    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    /// Check if a sequence is loaded
    pub fn has_sequence(&self) -> bool {
        self.sequence.is_some()
    }

    /// Get the loaded sequence
    pub fn sequence(&self) -> Option<&StepSequence> {
        self.sequence.as_ref()
    }

    /// Get current step index
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Get the current step
    pub fn current_step(&self) -> Option<&Step> {
        self.sequence.as_ref()?.get(self.current_index)
    }

    /// Iteration tag of the current step
    pub fn current_iteration(&self) -> Option<usize> {
        self.current_step().map(|s| s.iteration)
    }

    /// Get playback speed
    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    /// Time between automatic advances
    pub fn tick_interval(&self) -> std::time::Duration {
        self.speed.tick_interval()
    }

    /// Set playback speed
    ///
    /// Takes effect on the next tick; the driver reschedules from now when
    /// this is called while running. The index is untouched.
    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.speed = speed;
        tracing::debug!(
            "Playback speed set to {} ({:?} per step)",
            speed.value(),
            speed.tick_interval()
        );
    }

    /// Get the renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get the renderer mutably
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consume the controller, returning the renderer
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Load a sequence without starting it
    ///
    /// Always resets first, so loading while running discards the old run.
    /// An empty sequence is rejected and leaves the controller idle.
    pub fn load(&mut self, sequence: StepSequence) -> Result<()> {
        self.reset();

        if sequence.is_empty() {
            return Err(SortVisError::Playback(
                "cannot play an empty step sequence".to_string(),
            ));
        }

        tracing::info!("Loaded {} steps for playback", sequence.len());
        self.sequence = Some(sequence);
        self.state = PlaybackState::Ready;
        Ok(())
    }

    /// Load a sequence and start playing from step 0
    pub fn start(&mut self, sequence: StepSequence) -> Result<()> {
        self.load(sequence)?;
        self.play();
        Ok(())
    }

    /// Start or resume automatic playback
    ///
    /// From `Ready` plays from the current index, from `Paused` resumes,
    /// from `Completed` restarts at step 0.
    pub fn play(&mut self) {
        match self.state {
            PlaybackState::Ready => {
                self.state = PlaybackState::Running;
                self.show_current();
            }
            PlaybackState::Paused => self.resume(),
            PlaybackState::Completed => self.restart(),
            PlaybackState::Idle | PlaybackState::Running => {}
        }
    }

    /// Play again from step 0, whatever the current state
    ///
    /// Step 0 is rendered even if it was the last step shown. No-op when idle.
    pub fn restart(&mut self) {
        if !self.has_sequence() {
            return;
        }
        tracing::debug!("Playback restarted from {}", self.state.display_name());
        self.current_index = 0;
        self.last_rendered = None;
        self.state = PlaybackState::Running;
        self.show_current();
    }

    /// Suspend automatic playback, keeping the index
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Running {
            self.state = PlaybackState::Paused;
            tracing::debug!("Playback paused at step {}", self.current_index);
        }
    }

    /// Continue automatic playback from the current index
    pub fn resume(&mut self) {
        if self.state == PlaybackState::Paused {
            self.state = PlaybackState::Running;
            tracing::debug!("Playback resumed at step {}", self.current_index);
        }
    }

    /// Pause when running, resume when paused
    pub fn toggle_pause(&mut self) {
        match self.state {
            PlaybackState::Running => self.pause(),
            PlaybackState::Paused => self.resume(),
            _ => {}
        }
    }

    /// Timer tick: move to the next step, or complete at the last one
    ///
    /// Returns `true` while there may be more ticks to process.
    pub fn advance(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let len = self.len();

        if self.current_index + 1 < len {
            self.current_index += 1;
            tracing::trace!("Tick -> step {}", self.current_index);
            self.show_current();
            true
        } else {
            self.state = PlaybackState::Completed;
            tracing::info!("Playback completed after {} steps", len);
            self.renderer.playback_finished(len);
            false
        }
    }

    /// Move one step forward, clamped to the last step
    ///
    /// Returns `false` when idle or already at the last step.
    pub fn step_forward(&mut self) -> bool {
        if !self.can_step_forward() {
            return false;
        }
        self.current_index += 1;
        self.show_current();
        true
    }

    /// Move one step back, clamped to step 0
    pub fn step_backward(&mut self) -> bool {
        if !self.can_step_backward() {
            return false;
        }
        self.current_index -= 1;
        self.show_current();
        true
    }

    /// Whether [`PlaybackController::step_forward`] would move
    pub fn can_step_forward(&self) -> bool {
        self.has_sequence() && self.current_index + 1 < self.len()
    }

    /// Whether [`PlaybackController::step_backward`] would move
    pub fn can_step_backward(&self) -> bool {
        self.has_sequence() && self.current_index > 0
    }

    /// Jump to the first step of the iteration `delta` away from the current one
    ///
    /// No-op returning `false` when no step carries that iteration.
    pub fn jump_to_iteration(&mut self, delta: isize) -> bool {
        let Some(target) = self.iteration_target(delta) else {
            return false;
        };
        self.current_index = target;
        self.show_current();
        true
    }

    /// Whether [`PlaybackController::jump_to_iteration`] would move
    pub fn can_jump(&self, delta: isize) -> bool {
        self.iteration_target(delta).is_some()
    }

    /// Discard the sequence and return to idle
    pub fn reset(&mut self) {
        if self.state != PlaybackState::Idle {
            tracing::debug!("Playback reset from {}", self.state.display_name());
        }
        self.state = PlaybackState::Idle;
        self.sequence = None;
        self.current_index = 0;
        self.last_rendered = None;
    }

    /// Playback progress (0.0 to 1.0)
    pub fn progress(&self) -> f64 {
        let len = self.len();
        if len <= 1 {
            return if self.state == PlaybackState::Completed {
                1.0
            } else {
                0.0
            };
        }
        self.current_index as f64 / (len - 1) as f64
    }

    fn len(&self) -> usize {
        self.sequence.as_ref().map(|s| s.len()).unwrap_or(0)
    }

    fn iteration_target(&self, delta: isize) -> Option<usize> {
        let current = self.current_iteration()?;
        let wanted = current.checked_add_signed(delta)?;
        self.sequence.as_ref()?.first_step_of_iteration(wanted)
    }

    fn show_current(&mut self) {
        if self.last_rendered == Some(self.current_index) {
            return;
        }
        let Some(step) = self
            .sequence
            .as_ref()
            .and_then(|s| s.get(self.current_index))
        else {
            return;
        };
        self.renderer.render_step(self.current_index, step);
        self.last_rendered = Some(self.current_index);
    }
}
