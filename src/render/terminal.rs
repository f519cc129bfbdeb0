//! Plain-text step renderer
//!
//! Each step becomes a header line with the narration and a row of block
//! characters scaled between the smallest and largest value, followed by a
//! marker row: `^` under compared bars, `*` under mutated bars.

use std::io::Write;

use crate::session::Step;

use super::StepRenderer;

const BAR_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Renders steps to any writer (stdout in the binary)
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    /// Total number of steps, shown in the header when known
    total_steps: Option<usize>,
    show_bars: bool,
}

impl<W: Write> TerminalRenderer<W> {
    /// Create a renderer writing to `out`
    pub fn new(out: W) -> Self {
        Self {
            out,
            total_steps: None,
            show_bars: true,
        }
    }

    /// Only print narration lines
    pub fn without_bars(mut self) -> Self {
        self.show_bars = false;
        self
    }

    /// Set the step total shown in headers
    pub fn set_total_steps(&mut self, total: usize) {
        self.total_steps = Some(total);
    }

    /// Get the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_step(&mut self, index: usize, step: &Step) -> std::io::Result<()> {
        match self.total_steps {
            Some(total) => write!(self.out, "[{:>4}/{:<4}]", index + 1, total)?,
            None => write!(self.out, "[{:>4}]", index + 1)?,
        }
        writeln!(self.out, " it {:<3} {}", step.iteration, step.description)?;

        if self.show_bars {
            writeln!(self.out, "  {}", bar_row(&step.array_state))?;
            let markers = marker_row(step);
            if !markers.trim_end().is_empty() {
                writeln!(self.out, "  {}", markers.trim_end())?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> StepRenderer for TerminalRenderer<W> {
    fn render_step(&mut self, index: usize, step: &Step) {
        if let Err(e) = self.write_step(index, step) {
            tracing::warn!("Failed to render step {}: {}", index, e);
        }
    }

    fn playback_finished(&mut self, total_steps: usize) {
        if let Err(e) = writeln!(self.out, "Playback finished after {} steps", total_steps) {
            tracing::warn!("Failed to write playback summary: {}", e);
        }
    }
}

/// One glyph per value, scaled into the eight block heights
pub fn bar_row(values: &[i64]) -> String {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return String::new();
    };
    let span = max as f64 - min as f64;

    values
        .iter()
        .map(|&v| {
            if span == 0.0 {
                BAR_GLYPHS[BAR_GLYPHS.len() / 2]
            } else {
                let level = ((v as f64 - min as f64) / span * (BAR_GLYPHS.len() - 1) as f64).round();
                BAR_GLYPHS[level as usize]
            }
        })
        .collect()
}

fn marker_row(step: &Step) -> String {
    (0..step.array_state.len())
        .map(|i| {
            if step.swap_indexes.contains(&i) {
                '*'
            } else if step.highlight_indexes.contains(&i) {
                '^'
            } else {
                ' '
            }
        })
        .collect()
}
