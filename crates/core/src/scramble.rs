//! Scramble demo state - timed random text block and display color.
//!
//! Once per second the demo replaces its whole text block with fresh random
//! glyphs and picks a new bright display color. Between regenerations both
//! are stable, while the status line (measured TPS) is recomputed by the
//! view on every draw.

use tui_pixels_types::{Rgba, TICKS_PER_SECOND};

use crate::rng::SimpleRng;

/// Fixed alphabet the text block is sampled from (with replacement).
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Lines per text block.
pub const BLOCK_LINES: usize = 4;

/// Characters per line.
pub const LINE_LEN: usize = 8;

/// State for the scramble demo: counter, current text block, display color.
#[derive(Debug, Clone)]
pub struct ScrambleState {
    counter: u64,
    text: String,
    color: Rgba,
    rng: SimpleRng,
}

impl ScrambleState {
    /// Create the demo state with an explicit RNG seed.
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }

    /// Create the demo state around an existing random source.
    pub fn with_rng(rng: SimpleRng) -> Self {
        Self {
            counter: 0,
            text: String::new(),
            color: Rgba::BLACK,
            rng,
        }
    }

    /// Advance one tick, regenerating text and color on second boundaries.
    ///
    /// The boundary check runs before the increment, so the very first
    /// update populates the block (nothing is drawn from default state).
    pub fn step(&mut self) {
        if self.counter % TICKS_PER_SECOND as u64 == 0 {
            self.regenerate();
        }
        self.counter = self.counter.wrapping_add(1);
    }

    fn regenerate(&mut self) {
        self.text.clear();
        for _ in 0..BLOCK_LINES {
            for _ in 0..LINE_LEN {
                self.text.push(*self.rng.choose(ALPHABET) as char);
            }
            self.text.push('\n');
        }

        // Bright colors only: each channel in [128, 255], always opaque.
        self.color = Rgba::opaque(
            0x80 + self.rng.next_range(0x80) as u8,
            0x80 + self.rng.next_range(0x80) as u8,
            0x80 + self.rng.next_range(0x80) as u8,
        );
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Current text block: `BLOCK_LINES` lines, each `LINE_LEN` characters
    /// followed by a newline.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Rgba {
        self.color
    }
}
