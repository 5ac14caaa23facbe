//! Application-level keyboard handling.
//!
//! Only chrome-level keys are mapped here (quit, help, focus, button
//! activation). Everything else is left to the focused control, so the
//! decimal field sees every printable key and can gate it itself.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which control currently has focus on the host page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The decimal input field
    #[default]
    Field,
    /// The increment button
    Increment,
    /// The decrement button
    Decrement,
}

impl Focus {
    /// Cycle forward: field → increment → decrement → field
    pub fn next(self) -> Self {
        match self {
            Focus::Field => Focus::Increment,
            Focus::Increment => Focus::Decrement,
            Focus::Decrement => Focus::Field,
        }
    }

    /// Cycle backward
    pub fn prev(self) -> Self {
        match self {
            Focus::Field => Focus::Decrement,
            Focus::Increment => Focus::Field,
            Focus::Decrement => Focus::Increment,
        }
    }
}

/// Actions that can be triggered by chrome-level keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    FocusNext,
    FocusPrev,
    /// Press the focused button (Enter/Space)
    Activate,
    ToggleHelp,
    Back,
    Quit,
}

/// Input handler for processing chrome-level keyboard events
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Map a key event to a chrome-level action, or `None` when the key
    /// belongs to the focused control.
    pub fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::Enter => Some(Action::Activate),
            KeyCode::Char(' ') => Some(Action::Activate),
            // '?' can never be part of a decimal value, so it is safe to
            // steal from the field
            KeyCode::F(1) | KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Esc => Some(Action::Back),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::Field.next(), Focus::Increment);
        assert_eq!(Focus::Increment.next(), Focus::Decrement);
        assert_eq!(Focus::Decrement.next(), Focus::Field);

        assert_eq!(Focus::Field.prev(), Focus::Decrement);
        assert_eq!(Focus::Increment.prev(), Focus::Field);
    }

    #[test]
    fn test_chrome_keys() {
        let handler = InputHandler::new();

        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(handler.handle_key(tab), Some(Action::FocusNext));

        let help = KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE);
        assert_eq!(handler.handle_key(help), Some(Action::ToggleHelp));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key(ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_field_keys_fall_through() {
        let handler = InputHandler::new();

        for code in [
            KeyCode::Char('5'),
            KeyCode::Char('.'),
            KeyCode::Char('-'),
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Left,
            KeyCode::Backspace,
        ] {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(handler.handle_key(key), None, "{code:?} should fall through");
        }
    }
}
