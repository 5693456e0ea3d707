//! Hello demo state - a blinking debug message.

/// Tick counter for the hello demo.
///
/// The message is visible for 10 ticks, hidden for 10 ticks (20-tick blink
/// period).
#[derive(Debug, Clone, Default)]
pub struct HelloState {
    tick: u64,
}

impl HelloState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick. Never fails.
    pub fn advance(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Whether the message is visible on this tick.
    pub fn visible(&self) -> bool {
        (self.tick / 10) % 2 == 0
    }

    /// The debug message, rebuilt each frame from the live tick count.
    pub fn message(&self) -> String {
        format!("Hello, World! tick={}", self.tick)
    }
}
