//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI layer. It maps
//! `crossterm` key events into logical [`tui_pixels_types::Button`]s and
//! provides a held-state tracker suitable for terminal environments
//! (including terminals without key-release events).

pub mod map;
pub mod tracker;

pub use tui_pixels_types as types;

pub use map::{map_button, should_quit};
pub use tracker::KeyTracker;
