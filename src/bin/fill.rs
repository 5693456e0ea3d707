//! Fill demo: the whole canvas pulses through a red intensity wave.

use anyhow::Result;
use log::error;

use tui_pixels::core::FillState;
use tui_pixels::engine::{self, FrameContext, Sample, WindowConfig};
use tui_pixels::term::{Canvas, FillView};
use tui_pixels::types::ButtonState;

const CANVAS_WIDTH: u32 = 320;
const CANVAS_HEIGHT: u32 = 240;

struct FillSample {
    state: FillState,
    view: FillView,
}

impl Sample for FillSample {
    fn layout(&self) -> (u32, u32) {
        (CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    fn update(&mut self, _buttons: ButtonState) -> Result<()> {
        self.state.advance();
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
    let config = WindowConfig::for_canvas("Fill", CANVAS_WIDTH, CANVAS_HEIGHT);
    let mut sample = FillSample {
        state: FillState::new(),
        view: FillView,
    };
    engine::run(&config, &mut sample)
}
