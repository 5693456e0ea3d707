//! Mosaic demo state - a held-key ratio controller bounded to [1, 255].

use tui_pixels_types::ButtonState;

/// Smallest mosaic block size (no pixelation).
pub const MIN_RATIO: u8 = 1;

/// Largest mosaic block size.
pub const MAX_RATIO: u8 = 255;

/// Block size the demo starts with.
pub const DEFAULT_RATIO: u8 = 16;

/// Ratio controller for the mosaic demo.
///
/// The ratio is both the pixelation block size and the shrink/enlarge
/// factor. It moves one step per tick while a button is held and clamps at
/// both ends. Increase takes precedence when both buttons are held.
#[derive(Debug, Clone, Copy)]
pub struct MosaicState {
    ratio: u8,
}

impl MosaicState {
    pub fn new() -> Self {
        Self::with_ratio(DEFAULT_RATIO)
    }

    pub fn with_ratio(ratio: u8) -> Self {
        Self {
            ratio: ratio.clamp(MIN_RATIO, MAX_RATIO),
        }
    }

    /// Apply one tick of held-button input.
    pub fn step(&mut self, buttons: ButtonState) {
        if buttons.increase {
            if self.ratio < MAX_RATIO {
                self.ratio += 1;
            }
        } else if buttons.decrease {
            if self.ratio > MIN_RATIO {
                self.ratio -= 1;
            }
        }
    }

    pub fn ratio(&self) -> u8 {
        self.ratio
    }
}

impl Default for MosaicState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INCREASE: ButtonState = ButtonState {
        increase: true,
        decrease: false,
    };
    const DECREASE: ButtonState = ButtonState {
        increase: false,
        decrease: true,
    };
    const BOTH: ButtonState = ButtonState {
        increase: true,
        decrease: true,
    };

    #[test]
    fn starts_at_default_ratio() {
        assert_eq!(MosaicState::new().ratio(), DEFAULT_RATIO);
    }

    #[test]
    fn increase_saturates_at_max() {
        let mut state = MosaicState::new();
        for _ in 0..1000 {
            state.step(INCREASE);
        }
        assert_eq!(state.ratio(), MAX_RATIO);
        state.step(INCREASE);
        assert_eq!(state.ratio(), MAX_RATIO);
    }

    #[test]
    fn decrease_saturates_at_min() {
        let mut state = MosaicState::new();
        for _ in 0..1000 {
            state.step(DECREASE);
        }
        assert_eq!(state.ratio(), MIN_RATIO);
        state.step(DECREASE);
        assert_eq!(state.ratio(), MIN_RATIO);
    }

    #[test]
    fn no_input_means_no_change() {
        let mut state = MosaicState::new();
        state.step(ButtonState::default());
        assert_eq!(state.ratio(), DEFAULT_RATIO);
    }

    #[test]
    fn increase_wins_when_both_held() {
        let mut state = MosaicState::new();
        state.step(BOTH);
        assert_eq!(state.ratio(), DEFAULT_RATIO + 1);
    }

    #[test]
    fn with_ratio_clamps_out_of_range_values() {
        assert_eq!(MosaicState::with_ratio(0).ratio(), MIN_RATIO);
        assert_eq!(MosaicState::with_ratio(255).ratio(), MAX_RATIO);
    }
}
