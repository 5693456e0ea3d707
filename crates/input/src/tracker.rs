//! Held-key tracker for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a
//! timeout: terminal auto-repeat keeps refreshing the held state, and a key
//! that stops repeating expires shortly after.

use crossterm::event::KeyCode;

use tui_pixels_types::{Button, ButtonState};

use crate::map::map_button;

// In terminals without key-release events, a short timeout prevents a single
// tap from turning into a sustained "held" state.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks held/not-held state for the logical buttons.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    increase_ms: u32,
    decrease_ms: u32,
    release_timeout_ms: u32,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            increase_ms: 0,
            decrease_ms: 0,
            release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    pub fn release_timeout_ms(&self) -> u32 {
        self.release_timeout_ms
    }

    /// Feed a key press (or terminal auto-repeat) event.
    pub fn key_down(&mut self, code: KeyCode) {
        match map_button(code) {
            Some(Button::Increase) => self.increase_ms = self.release_timeout_ms,
            Some(Button::Decrease) => self.decrease_ms = self.release_timeout_ms,
            None => {}
        }
    }

    /// Feed a key release event (terminals with release reporting).
    pub fn key_up(&mut self, code: KeyCode) {
        match map_button(code) {
            Some(Button::Increase) => self.increase_ms = 0,
            Some(Button::Decrease) => self.decrease_ms = 0,
            None => {}
        }
    }

    /// Age the held state by one tick worth of milliseconds.
    pub fn update(&mut self, dt_ms: u32) {
        self.increase_ms = self.increase_ms.saturating_sub(dt_ms);
        self.decrease_ms = self.decrease_ms.saturating_sub(dt_ms);
    }

    /// Snapshot the current held state for the demo update step.
    pub fn buttons(&self) -> ButtonState {
        ButtonState {
            increase: self.increase_ms > 0,
            decrease: self.decrease_ms > 0,
        }
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}
