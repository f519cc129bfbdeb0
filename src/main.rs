//! Sorting Visualizer - Main Entry Point
//!
//! Reads or generates an array, classifies it, sorts it with the configured algorithm
//! and replays the recorded steps in the terminal.

use anyhow::Context;
use sortvis_rs::{
    algorithms,
    analysis::{recommend, Classifier},
    config::VisualizerConfig,
    generator::ArrayGenerator,
    render::{RunReport, TerminalRenderer},
    session::{PlaybackCommand, PlaybackController, PlaybackDriver},
};
use std::io::BufRead;
use tokio::sync::mpsc::UnboundedSender;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,sortvis_rs=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting sorting visualizer");

    let config = match VisualizerConfig::resolve_path(std::env::args().nth(1)) {
        Some(path) => {
            tracing::info!("Loading config from {:?}", path);
            VisualizerConfig::load(&path)
                .with_context(|| format!("loading config from {}", path.display()))?
        }
        None => VisualizerConfig::default(),
    };

    let array = match config.input_array()? {
        Some(array) => {
            tracing::info!("Using {} configured elements", array.len());
            array
        }
        None => {
            let mut generator = match config.seed {
                Some(seed) => ArrayGenerator::new(seed),
                None => ArrayGenerator::from_entropy(),
            };
            generator.generate(config.pattern, config.array_size)
        }
    };

    let classification = Classifier::new(config.classifier).classify(&array)?;
    tracing::info!(
        "Input is {}: {} {}",
        classification,
        classification.analysis(),
        classification.recommendation()
    );
    let suggestion = recommend(array.len(), classification.into(), config.priority);
    tracing::info!("Suggested algorithm: {}", suggestion);

    let outcome = algorithms::sort(config.algorithm, &array)
        .with_context(|| format!("running {}", config.algorithm))?;
    let report = RunReport::new(config.algorithm, &outcome);
    let (sorted, steps, stats) = outcome.into_parts();
    tracing::debug!("Sorted output {:?} ({})", sorted, stats);

    let mut renderer = TerminalRenderer::new(std::io::stdout());
    renderer.set_total_steps(steps.len());

    let mut controller = PlaybackController::with_speed(renderer, config.speed);
    controller.start(steps)?;

    let (driver, commands) = PlaybackDriver::new(controller);
    if config.interactive {
        tracing::info!("Controls: p pause/resume, n/b step, ]/[ iteration, +/- speed, r restart, q quit");
        spawn_command_reader(commands);
    } else {
        drop(commands);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("building playback runtime")?;
    let controller = runtime.block_on(driver.run());
    tracing::info!("Playback ended in state {}", controller.state().display_name());

    println!("{}", report.render(config.report_format)?);
    Ok(())
}

/// Forward stdin lines to the playback loop until `q` or end of input
fn spawn_command_reader(commands: UnboundedSender<PlaybackCommand>) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            let Some(command) = parse_command(line.trim()) else {
                tracing::warn!("Unknown command: {:?}", line.trim());
                continue;
            };
            if commands.send(command).is_err() || command == PlaybackCommand::Quit {
                break;
            }
        }
    });
}

fn parse_command(input: &str) -> Option<PlaybackCommand> {
    let command = match input {
        "p" | "" => PlaybackCommand::TogglePause,
        "n" => PlaybackCommand::StepForward,
        "b" => PlaybackCommand::StepBackward,
        "]" => PlaybackCommand::NextIteration,
        "[" => PlaybackCommand::PreviousIteration,
        "+" => PlaybackCommand::Faster,
        "-" => PlaybackCommand::Slower,
        "r" => PlaybackCommand::Restart,
        "q" => PlaybackCommand::Quit,
        _ => return None,
    };
    Some(command)
}
