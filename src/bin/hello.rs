//! Hello demo: a blinking debug overlay, ten ticks on and ten ticks off.

use anyhow::Result;
use log::error;

use tui_pixels::core::HelloState;
use tui_pixels::engine::{self, FrameContext, Sample, WindowConfig};
use tui_pixels::term::{Canvas, HelloView};
use tui_pixels::types::ButtonState;

const CANVAS_WIDTH: u32 = 320;
const CANVAS_HEIGHT: u32 = 240;

struct HelloSample {
    state: HelloState,
    view: HelloView,
}

impl Sample for HelloSample {
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
    let config = WindowConfig::for_canvas("Hello, World!", CANVAS_WIDTH, CANVAS_HEIGHT);
    let mut sample = HelloSample {
        state: HelloState::new(),
        view: HelloView,
    };
    engine::run(&config, &mut sample)
}
