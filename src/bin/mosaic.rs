//! Mosaic demo: pixelates a picture, block size driven by held keys.
//!
//! Hold Q to grow the blocks (up to 255), W to shrink them (down to 1).
//! The source picture is decoded once at startup; a decode failure is
//! fatal.

use anyhow::{Context, Result};
use log::{error, info};

use tui_pixels::core::MosaicState;
use tui_pixels::engine::{self, FrameContext, Sample, WindowConfig};
use tui_pixels::term::{load_bitmap, Canvas, MosaicView};
use tui_pixels::types::ButtonState;

const CANVAS_WIDTH: u32 = 320;
const CANVAS_HEIGHT: u32 = 240;

const IMAGE_PATH: &str = "assets/images/testcard.png";

struct MosaicSample {
    state: MosaicState,
    view: MosaicView,
}

impl Sample for MosaicSample {
    fn layout(&self) -> (u32, u32) {
        (CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    fn update(&mut self, buttons: ButtonState) -> Result<()> {
        self.state.step(buttons);
        Ok(())
    }

    fn draw(&mut self, canvas: &mut Canvas, _ctx: &FrameContext) {
        self.view.render(&self.state, canvas);
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
    let source = load_bitmap(IMAGE_PATH).context("load mosaic source image")?;
    info!(
        "loaded {}x{} source from {IMAGE_PATH}",
        source.width(),
        source.height()
    );

    let config = WindowConfig::for_canvas("Mosaic (tui-pixels demo)", CANVAS_WIDTH, CANVAS_HEIGHT);
    let mut sample = MosaicSample {
        state: MosaicState::new(),
        view: MosaicView::new(source),
    };
    engine::run(&config, &mut sample)
}
