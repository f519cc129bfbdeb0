//! End-to-end playback of recorded sorts

mod common;

use common::builders::SequenceBuilder;
use common::mock_helpers::RecordingRenderer;
use sortvis_rs::algorithms::{self, Algorithm};
use sortvis_rs::session::PlaybackDriver;
use sortvis_rs::{PlaybackController, PlaybackSpeed, PlaybackState};

fn loaded_controller(algorithm: Algorithm, input: &[i64]) -> PlaybackController<RecordingRenderer> {
    let outcome = algorithms::sort(algorithm, input).unwrap();
    let mut controller = PlaybackController::new(RecordingRenderer::default());
    controller.load(outcome.steps).unwrap();
    controller
}

#[test]
fn test_stepping_reaches_the_last_step() {
    let mut controller = loaded_controller(Algorithm::Selection, &[4, 2, 7, 1, 3]);
    let total = controller.sequence().unwrap().len();

    let mut moves = 0;
    while controller.step_forward() {
        moves += 1;
    }

    assert_eq!(moves, total - 1);
    assert_eq!(controller.current_index(), total - 1);
    assert_eq!(
        controller.current_step().unwrap().array_state,
        vec![1, 2, 3, 4, 7]
    );

    // Clamped at the end
    assert!(!controller.step_forward());
    assert_eq!(controller.current_index(), total - 1);
}

#[test]
fn test_step_backward_at_start_is_noop() {
    let mut controller = loaded_controller(Algorithm::Bubble, &[3, 2, 1]);
    assert!(!controller.step_backward());
    assert_eq!(controller.current_index(), 0);
    assert!(controller.renderer().rendered.is_empty());
}

#[test]
fn test_iteration_jumps_land_on_first_step() {
    let sequence = SequenceBuilder::new()
        .compares(3)
        .iteration(1)
        .compares(2)
        .iteration(2)
        .compares(4)
        .build();

    let mut controller = PlaybackController::new(RecordingRenderer::default());
    controller.load(sequence).unwrap();
    controller.step_forward();

    assert!(controller.jump_to_iteration(1));
    assert_eq!(controller.current_index(), 3);
    assert!(controller.jump_to_iteration(1));
    assert_eq!(controller.current_index(), 5);

    // No iteration 3
    assert!(!controller.jump_to_iteration(1));
    assert_eq!(controller.current_index(), 5);

    assert!(controller.jump_to_iteration(-2));
    assert_eq!(controller.current_index(), 0);
    assert!(!controller.can_jump(-1));
}

#[test]
fn test_play_renders_each_step_once() {
    let mut controller = loaded_controller(Algorithm::Insertion, &[3, 1, 2]);
    let total = controller.sequence().unwrap().len();

    controller.play();
    while controller.advance() {}

    assert_eq!(controller.state(), PlaybackState::Completed);
    assert_eq!(controller.renderer().rendered, (0..total).collect::<Vec<_>>());
    assert_eq!(controller.renderer().finished_with, Some(total));
    common::assert_float_eq(controller.progress(), 1.0, 1e-9);
}

#[test]
fn test_restart_from_paused_returns_to_first_step() {
    let mut controller = loaded_controller(Algorithm::Bubble, &[3, 2, 1]);
    controller.play();
    controller.advance();
    controller.advance();
    controller.pause();
    assert_eq!(controller.current_index(), 2);

    controller.restart();
    assert_eq!(controller.current_index(), 0);
    assert_eq!(controller.state(), PlaybackState::Running);
    assert_eq!(controller.renderer().rendered, vec![0, 1, 2, 0]);
}

#[test]
fn test_single_step_replay_renders_again() {
    let mut controller = loaded_controller(Algorithm::Bubble, &[5]);
    controller.play();
    assert!(!controller.advance());
    assert_eq!(controller.state(), PlaybackState::Completed);

    controller.play();
    assert!(!controller.advance());
    assert_eq!(controller.renderer().rendered, vec![0, 0]);
    assert_eq!(controller.renderer().finished_with, Some(1));
}

#[test]
fn test_reset_clears_everything() {
    let mut controller = loaded_controller(Algorithm::Merge, &[5, 1, 4]);
    controller.play();
    controller.advance();
    controller.reset();

    assert_eq!(controller.state(), PlaybackState::Idle);
    assert!(!controller.has_sequence());
    assert!(!controller.step_forward());
    assert!(!controller.jump_to_iteration(1));
}

#[tokio::test(start_paused = true)]
async fn test_driver_plays_a_real_sort() {
    let outcome = algorithms::sort(Algorithm::Count, &[3, 0, 2, 3, 1]).unwrap();
    let total = outcome.steps.len();

    let mut controller =
        PlaybackController::with_speed(RecordingRenderer::default(), PlaybackSpeed::new(990));
    controller.start(outcome.steps).unwrap();

    let (driver, commands) = PlaybackDriver::new(controller);
    drop(commands);
    let controller = driver.run().await;

    assert_eq!(controller.state(), PlaybackState::Completed);
    assert_eq!(controller.renderer().rendered.len(), total);
    assert_eq!(
        controller.renderer().descriptions.last().unwrap(),
        "Final sorted array: [0, 1, 2, 3, 3]"
    );
}
