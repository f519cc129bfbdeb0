//! Timer loop that drives a [`PlaybackController`]
//!
//! Runs on a single task: the only suspension point is the wait for either
//! the next tick deadline or the next [`PlaybackCommand`], whichever comes
//! first. Ticks are fixed-rate (deadline += interval) unless a command
//! restarts the schedule: play/resume and speed changes reschedule from now.

use tokio::sync::mpsc;
use tokio::time::{timeout_at, Instant};

use crate::config::PlaybackSpeed;
use crate::render::StepRenderer;

use super::player::PlaybackController;

/// User controls forwarded to the playback loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    /// Jump back to step 0 and play
    Restart,
    Pause,
    Resume,
    TogglePause,
    StepForward,
    StepBackward,
    NextIteration,
    PreviousIteration,
    SetSpeed(PlaybackSpeed),
    Faster,
    Slower,
    /// Discard the sequence; the loop then ends once commands stop
    Reset,
    /// Stop the loop immediately
    Quit,
}

/// Owns a controller and feeds it ticks and commands until playback is over
pub struct PlaybackDriver<R> {
    controller: PlaybackController<R>,
    commands: mpsc::UnboundedReceiver<PlaybackCommand>,
}

impl<R: StepRenderer> PlaybackDriver<R> {
    /// Create a driver and the sender used to control it
    pub fn new(
        controller: PlaybackController<R>,
    ) -> (Self, mpsc::UnboundedSender<PlaybackCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                controller,
                commands: rx,
            },
            tx,
        )
    }

    /// Get the controller
    pub fn controller(&self) -> &PlaybackController<R> {
        &self.controller
    }

    /// Run until quit, or until the command channel is closed and the
    /// controller is no longer running. Returns the controller.
    pub async fn run(mut self) -> PlaybackController<R> {
        let mut deadline = self
            .controller
            .is_running()
            .then(|| Instant::now() + self.controller.tick_interval());
        let mut commands_open = true;

        loop {
            let received = match (deadline, commands_open) {
                (Some(at), true) => match timeout_at(at, self.commands.recv()).await {
                    Ok(command) => command,
                    Err(_) => {
                        deadline = self.tick(at);
                        continue;
                    }
                },
                (Some(at), false) => {
                    tokio::time::sleep_until(at).await;
                    deadline = self.tick(at);
                    continue;
                }
                (None, true) => self.commands.recv().await,
                (None, false) => break,
            };

            let Some(command) = received else {
                tracing::debug!("Playback command channel closed");
                commands_open = false;
                continue;
            };

            if command == PlaybackCommand::Quit {
                tracing::info!("Playback stopped by user");
                break;
            }

            let was_running = self.controller.is_running();
            let reschedule = matches!(
                command,
                PlaybackCommand::Restart
                    | PlaybackCommand::SetSpeed(_)
                    | PlaybackCommand::Faster
                    | PlaybackCommand::Slower
            );
            self.apply(command);

            deadline = if !self.controller.is_running() {
                None
            } else if !was_running || reschedule || deadline.is_none() {
                Some(Instant::now() + self.controller.tick_interval())
            } else {
                deadline
            };
        }

        self.controller
    }

    fn tick(&mut self, at: Instant) -> Option<Instant> {
        self.controller.advance();
        self.controller
            .is_running()
            .then(|| at + self.controller.tick_interval())
    }

    fn apply(&mut self, command: PlaybackCommand) {
        let controller = &mut self.controller;
        match command {
            PlaybackCommand::Play => controller.play(),
            PlaybackCommand::Restart => controller.restart(),
            PlaybackCommand::Pause => controller.pause(),
            PlaybackCommand::Resume => controller.resume(),
            PlaybackCommand::TogglePause => controller.toggle_pause(),
            PlaybackCommand::StepForward => {
                controller.step_forward();
            }
            PlaybackCommand::StepBackward => {
                controller.step_backward();
            }
            PlaybackCommand::NextIteration => {
                controller.jump_to_iteration(1);
            }
            PlaybackCommand::PreviousIteration => {
                controller.jump_to_iteration(-1);
            }
            PlaybackCommand::SetSpeed(speed) => controller.set_speed(speed),
            PlaybackCommand::Faster => {
                let speed = controller.speed().faster();
                controller.set_speed(speed);
            }
            PlaybackCommand::Slower => {
                let speed = controller.speed().slower();
                controller.set_speed(speed);
            }
            PlaybackCommand::Reset => controller.reset(),
            PlaybackCommand::Quit => {}
        }
    }
}
