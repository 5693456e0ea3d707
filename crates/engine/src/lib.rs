//! Host loop for the demos.
//!
//! The engine owns everything a demo should not: terminal setup and
//! restore, event polling, fixed-rate tick pacing, input tracking, and
//! flushing the canvas. A demo only implements [`Sample`].
//!
//! Ordering guarantee: `update` for tick N always completes before `draw`
//! for tick N begins, and `draw` receives the demo state immutably through
//! the sample's own fields. Everything runs on one thread.

pub mod tps;

use std::time::{Duration, Instant};

use anyhow::Result;

use crossterm::event::{self, Event, KeyEventKind};

use tui_pixels_input::{should_quit, KeyTracker};
use tui_pixels_term::{Canvas, PixelRenderer};
use tui_pixels_types::{ButtonState, TICKS_PER_SECOND, TICK_MS};

pub use tps::TpsCounter;

/// Per-frame data the host hands to `draw`.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Measured ticks per second, recomputed live (never a constant).
    pub tps: f32,
}

/// The contract every demo implements.
///
/// The host calls `layout` once to size the canvas, then alternates
/// `update` and `draw` at the fixed tick rate until the user quits or
/// `update` fails (which is fatal).
pub trait Sample {
    /// Logical canvas size in pixels, independent of the terminal size.
    fn layout(&self) -> (u32, u32);

    /// Advance one tick. An error terminates the demo.
    fn update(&mut self, buttons: ButtonState) -> Result<()>;

    /// Draw the current state. Must not mutate demo state.
    fn draw(&mut self, canvas: &mut Canvas, ctx: &FrameContext);
}

/// Terminal window parameters for one demo.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    /// Preferred terminal width in cells.
    pub cols: u16,
    /// Preferred terminal height in cells.
    pub rows: u16,
}

impl WindowConfig {
    /// Derive the preferred terminal size from a canvas size.
    ///
    /// One cell shows a 1x2 pixel column, so rows are half the canvas
    /// height.
    pub fn for_canvas(title: &str, canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            title: title.to_owned(),
            cols: canvas_width.min(u16::MAX as u32) as u16,
            rows: canvas_height.div_ceil(2).min(u16::MAX as u32) as u16,
        }
    }
}

/// Run a demo until the user quits or its update step fails.
pub fn run(config: &WindowConfig, sample: &mut dyn Sample) -> Result<()> {
    let mut term = PixelRenderer::new();
    term.enter(&config.title, Some((config.cols, config.rows)))?;

    let result = run_loop(&mut term, sample);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run_loop(term: &mut PixelRenderer, sample: &mut dyn Sample) -> Result<()> {
    let (canvas_w, canvas_h) = sample.layout();
    let mut canvas = Canvas::new(canvas_w, canvas_h);

    let mut tracker = KeyTracker::new();
    let mut tps = TpsCounter::new();

    let tick_duration = Duration::from_secs(1) / TICKS_PER_SECOND;
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        tracker.key_down(key.code);
                    }
                    KeyEventKind::Release => {
                        tracker.key_up(key.code);
                    }
                },
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick: update, then draw, then flush.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            tracker.update(TICK_MS);
            sample.update(tracker.buttons())?;
            tps.count_tick();

            let ctx = FrameContext {
                tps: tps.measured(),
            };
            sample.draw(&mut canvas, &ctx);
            term.draw(&canvas)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_halves_canvas_height() {
        let config = WindowConfig::for_canvas("Demo", 320, 240);
        assert_eq!(config.cols, 320);
        assert_eq!(config.rows, 120);

        let odd = WindowConfig::for_canvas("Demo", 320, 241);
        assert_eq!(odd.rows, 121);
    }
}
