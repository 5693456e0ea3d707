//! Tick-rate measurement over a sliding one-second window.

use std::time::{Duration, Instant};

/// Counts host-loop ticks and reports the measured rate.
///
/// The measured value starts at 0.0 and updates once per wall-clock
/// second, matching how a frame counter behaves before its first window
/// closes.
#[derive(Debug, Clone)]
pub struct TpsCounter {
    window_start: Instant,
    ticks_in_window: u32,
    measured: f32,
}

impl TpsCounter {
    pub fn new() -> Self {
        Self {
            window_start: Instant::now(),
            ticks_in_window: 0,
            measured: 0.0,
        }
    }

    /// Record one tick; closes the measurement window after a second.
    pub fn count_tick(&mut self) {
        self.ticks_in_window += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed >= Duration::from_secs(1) {
            self.measured = self.ticks_in_window as f32 / elapsed.as_secs_f32();
            self.ticks_in_window = 0;
            self.window_start = Instant::now();
        }
    }

    /// Most recently measured ticks per second.
    pub fn measured(&self) -> f32 {
        self.measured
    }
}

impl Default for TpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(TpsCounter::new().measured(), 0.0);
    }

    #[test]
    fn counting_within_a_window_does_not_change_measurement() {
        let mut tps = TpsCounter::new();
        for _ in 0..10 {
            tps.count_tick();
        }
        // Well under a second has passed; the window is still open.
        assert_eq!(tps.measured(), 0.0);
    }
}
