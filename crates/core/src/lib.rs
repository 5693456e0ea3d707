//! Core module - pure demo state logic with no external dependencies
//!
//! This module contains the per-tick state transitions of every demo.
//! It has zero dependencies on rendering, terminals, or I/O, so each state
//! record can be driven and asserted directly in tests.

pub mod fill;
pub mod hello;
pub mod mosaic;
pub mod rng;
pub mod scramble;

pub use tui_pixels_types as types;

pub use fill::FillState;
pub use hello::HelloState;
pub use mosaic::MosaicState;
pub use rng::SimpleRng;
pub use scramble::ScrambleState;
