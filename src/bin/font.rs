//! Font demo: bitmap-face text rendering with a once-per-second scramble.
//!
//! The face is loaded from a JSON resource before the run loop starts.
//! A missing or unparsable resource is fatal: there is no degraded
//! rendering mode without a font.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::{error, info};

use tui_pixels::core::ScrambleState;
use tui_pixels::engine::{self, FrameContext, Sample, WindowConfig};
use tui_pixels::term::{Canvas, FontFace, TextView};
use tui_pixels::types::ButtonState;

const CANVAS_WIDTH: u32 = 640;
const CANVAS_HEIGHT: u32 = 480;

const FONT_PATH: &str = "assets/fonts/pixel5x7.json";

struct FontSample {
    state: ScrambleState,
    view: TextView,
}

impl Sample for FontSample {
    fn layout(&self) -> (u32, u32) {
        (CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    fn update(&mut self, _buttons: ButtonState) -> Result<()> {
        self.state.step();
        Ok(())
    }

    fn draw(&mut self, canvas: &mut Canvas, ctx: &FrameContext) {
        self.view.render(&self.state, ctx.tps, canvas);
    }
}

fn main() {
    env_logger::init();
    if let Err(err) = run_demo() {
        error!("fatal: {err:#}");
        std::process::exit(1);
    }
}

fn run_demo() -> Result<()> {
    let face = FontFace::load(FONT_PATH).context("load font face")?;
    info!("loaded font face {face} from {FONT_PATH}");

    let config = WindowConfig::for_canvas("Font (tui-pixels demo)", CANVAS_WIDTH, CANVAS_HEIGHT);
    let mut sample = FontSample {
        state: ScrambleState::new(clock_seed()),
        view: TextView::new(&face),
    };
    engine::run(&config, &mut sample)
}

/// Seed the scramble from the wall clock, keeping the RNG itself injectable.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
