//! Key mapping from terminal events to logical buttons.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_pixels_types::Button;

/// Map keyboard input to a logical button.
///
/// Q grows the mosaic block size, W shrinks it (the only demo input).
pub fn map_button(code: KeyCode) -> Option<Button> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Button::Increase),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Button::Decrease),
        _ => None,
    }
}

/// Check if a key should quit the demo.
///
/// Q and W are taken by the mosaic controls, so quitting is Esc or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_button_keys() {
        assert_eq!(map_button(KeyCode::Char('q')), Some(Button::Increase));
        assert_eq!(map_button(KeyCode::Char('Q')), Some(Button::Increase));
        assert_eq!(map_button(KeyCode::Char('w')), Some(Button::Decrease));
        assert_eq!(map_button(KeyCode::Char('W')), Some(Button::Decrease));
        assert_eq!(map_button(KeyCode::Char('x')), None);
        assert_eq!(map_button(KeyCode::Esc), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
    }
}
