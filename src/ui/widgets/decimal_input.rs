//! Decimal input widget: a single-line field whose Up/Down keys step the
//! value at the caret, plus the increment/decrement button controls.
//!
//! The widget is a controlled view: the authoritative value string lives
//! with the owner, and every accepted change is reported back through
//! [`DecimalInputAction::Changed`]. The only state the widget keeps is the
//! transient caret offset.

use crate::domain::{decrement, increment, is_valid_edit, Step};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Single-line decimal input field
pub struct DecimalInputWidget<'a> {
    /// Current value (owned by the caller)
    value: &'a str,
    /// Caret offset into the value
    cursor: usize,
    /// Hint shown while the value is empty
    placeholder: &'a str,
    /// Title for the input box
    title: &'a str,
    /// Whether the field has focus
    focused: bool,
}

impl<'a> DecimalInputWidget<'a> {
    pub fn new(value: &'a str, cursor: usize) -> Self {
        Self {
            value,
            cursor,
            placeholder: "",
            title: "Value",
            focused: true,
        }
    }

    /// Set placeholder text
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set title
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Build the field content as a styled line, with a block caret when
    /// focused.
    fn content_line(&self) -> Line<'a> {
        let caret_style = Style::default().fg(Color::Black).bg(Color::White);
        let dim = Style::default().fg(Color::DarkGray);

        if !self.focused {
            return if self.value.is_empty() {
                Line::styled(self.placeholder, dim)
            } else {
                Line::raw(self.value)
            };
        }

        if self.value.is_empty() {
            return Line::from(vec![
                Span::styled(" ", caret_style),
                Span::styled(self.placeholder, dim),
            ]);
        }

        let before: String = self.value.chars().take(self.cursor).collect();
        let at: String = self.value.chars().skip(self.cursor).take(1).collect();
        let after: String = self.value.chars().skip(self.cursor + 1).collect();
        let caret = if at.is_empty() { " ".to_string() } else { at };

        Line::from(vec![
            Span::raw(before),
            Span::styled(caret, caret_style),
            Span::raw(after),
        ])
    }
}

impl Widget for DecimalInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.title));

        let line = self.content_line();
        Paragraph::new(line).block(block).render(area, buf);
    }
}

/// Increment/decrement button control
pub struct StepButton<'a> {
    label: &'a str,
    focused: bool,
}

impl<'a> StepButton<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
        }
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for StepButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_style, label_style) = if self.focused {
            (
                Style::default().fg(Color::Cyan),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (Style::default().fg(Color::DarkGray), Style::default())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        Paragraph::new(Line::styled(self.label, label_style))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

/// Result of feeding a key event to the input state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecimalInputAction {
    /// Key ignored or rejected; the value is unchanged
    None,
    /// The owner should adopt this as the new value
    Changed(String),
}

/// Caret bookkeeping for the decimal input field.
///
/// Holds no copy of the value. `pending_cursor` remembers the offset
/// captured at the moment of an accepted edit so [`sync`](Self::sync) can
/// restore it once the owner has re-rendered the new value; without it the
/// caret would land at whatever stale offset the previous value left.
#[derive(Debug, Default, Clone)]
pub struct DecimalInputState {
    /// Caret offset (character index into the value)
    pub cursor: usize,
    pending_cursor: Option<usize>,
}

impl DecimalInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with the caret placed at the end of the given value
    pub fn at_end_of(value: &str) -> Self {
        Self {
            cursor: value.chars().count(),
            pending_cursor: None,
        }
    }

    /// Handle a key event against the owner's current value.
    ///
    /// Up/Down step the value at the caret and never fall through to caret
    /// movement. Character, backspace and delete edits are accepted only if
    /// the resulting text passes the edit gate; rejected edits change
    /// nothing and report nothing.
    pub fn handle_key(&mut self, key: KeyEvent, value: &str, step: &Step) -> DecimalInputAction {
        match key.code {
            KeyCode::Up => {
                self.pending_cursor = Some(self.cursor);
                DecimalInputAction::Changed(increment(value, step, self.cursor))
            }
            KeyCode::Down => {
                self.pending_cursor = Some(self.cursor);
                DecimalInputAction::Changed(decrement(value, step, self.cursor))
            }
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return DecimalInputAction::None;
                }
                let at = self.cursor.min(value.len());
                let mut candidate = value.to_string();
                candidate.insert(at, c);
                if is_valid_edit(&candidate, step.fraction_digits) {
                    self.cursor = at + 1;
                    self.pending_cursor = Some(self.cursor);
                    DecimalInputAction::Changed(candidate)
                } else {
                    DecimalInputAction::None
                }
            }
            KeyCode::Backspace => {
                if self.cursor == 0 || self.cursor > value.len() {
                    return DecimalInputAction::None;
                }
                let mut candidate = value.to_string();
                candidate.remove(self.cursor - 1);
                if is_valid_edit(&candidate, step.fraction_digits) {
                    self.cursor -= 1;
                    self.pending_cursor = Some(self.cursor);
                    DecimalInputAction::Changed(candidate)
                } else {
                    DecimalInputAction::None
                }
            }
            KeyCode::Delete => {
                if self.cursor >= value.len() {
                    return DecimalInputAction::None;
                }
                let mut candidate = value.to_string();
                candidate.remove(self.cursor);
                if is_valid_edit(&candidate, step.fraction_digits) {
                    self.pending_cursor = Some(self.cursor);
                    DecimalInputAction::Changed(candidate)
                } else {
                    DecimalInputAction::None
                }
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                DecimalInputAction::None
            }
            KeyCode::Right => {
                if self.cursor < value.len() {
                    self.cursor += 1;
                }
                DecimalInputAction::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                DecimalInputAction::None
            }
            KeyCode::End => {
                self.cursor = value.len();
                DecimalInputAction::None
            }
            _ => DecimalInputAction::None,
        }
    }

    /// Restore the caret after the owner adopted a new value.
    ///
    /// Re-applies the offset captured at the moment of the edit, clamped to
    /// the new length.
    pub fn sync(&mut self, value: &str) {
        match self.pending_cursor.take() {
            Some(pos) => self.cursor = pos.min(value.len()),
            None => self.cursor = self.cursor.min(value.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_valid_digits() {
        let step = Step::default();
        let mut state = DecimalInputState::new();

        let action = state.handle_key(key(KeyCode::Char('1')), "", &step);
        assert_eq!(action, DecimalInputAction::Changed("1".to_string()));
        state.sync("1");

        let action = state.handle_key(key(KeyCode::Char('2')), "1", &step);
        assert_eq!(action, DecimalInputAction::Changed("12".to_string()));
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_invalid_keystroke_is_dropped() {
        let step = Step::default();
        let mut state = DecimalInputState::at_end_of("12.5");

        let action = state.handle_key(key(KeyCode::Char('a')), "12.5", &step);
        assert_eq!(action, DecimalInputAction::None);
        assert_eq!(state.cursor, 4);
    }

    #[test]
    fn test_third_fractional_digit_rejected() {
        let step = Step::default();
        let mut state = DecimalInputState::at_end_of("12.55");

        let action = state.handle_key(key(KeyCode::Char('5')), "12.55", &step);
        assert_eq!(action, DecimalInputAction::None);
    }

    #[test]
    fn test_leading_minus_accepted() {
        let step = Step::default();
        let mut state = DecimalInputState::new();

        let action = state.handle_key(key(KeyCode::Char('-')), "3.2", &step);
        assert_eq!(action, DecimalInputAction::Changed("-3.2".to_string()));
    }

    #[test]
    fn test_backspace_forwards_raw_text() {
        let step = Step::default();
        let mut state = DecimalInputState::at_end_of("12.5");

        let action = state.handle_key(key(KeyCode::Backspace), "12.5", &step);
        assert_eq!(action, DecimalInputAction::Changed("12.".to_string()));
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn test_up_carries_at_fraction_boundary() {
        let step = Step::default();
        let mut state = DecimalInputState::at_end_of("5.99");

        let action = state.handle_key(key(KeyCode::Up), "5.99", &step);
        assert_eq!(action, DecimalInputAction::Changed("6.00".to_string()));
    }

    #[test]
    fn test_down_borrows_at_fraction_boundary() {
        let step = Step::default();
        let mut state = DecimalInputState::at_end_of("5.00");

        let action = state.handle_key(key(KeyCode::Down), "5.00", &step);
        assert_eq!(action, DecimalInputAction::Changed("4.99".to_string()));
    }

    #[test]
    fn test_up_on_integer_side_uses_integer_magnitude() {
        let step = Step::parse("1.00").unwrap();
        let mut state = DecimalInputState::new(); // caret at offset 0

        let action = state.handle_key(key(KeyCode::Up), "3.00", &step);
        assert_eq!(action, DecimalInputAction::Changed("4.00".to_string()));
    }

    #[test]
    fn test_caret_restored_after_step() {
        let step = Step::default();
        let mut state = DecimalInputState::new();
        state.cursor = 3;

        let DecimalInputAction::Changed(next) = state.handle_key(key(KeyCode::Up), "5.98", &step)
        else {
            panic!("expected a change");
        };
        state.sync(&next);
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn test_caret_clamped_when_value_shrinks() {
        let step = Step::default();
        let mut state = DecimalInputState::at_end_of("-0.01");

        // Stepping up from -0.01 at the end lands on a shorter string
        let DecimalInputAction::Changed(next) = state.handle_key(key(KeyCode::Up), "-0.01", &step)
        else {
            panic!("expected a change");
        };
        state.sync(&next);
        assert!(next.len() < 5);
        assert_eq!(state.cursor, next.len());
    }

    #[test]
    fn test_navigation_keys_do_not_notify() {
        let step = Step::default();
        let mut state = DecimalInputState::at_end_of("12.5");

        assert_eq!(
            state.handle_key(key(KeyCode::Left), "12.5", &step),
            DecimalInputAction::None
        );
        assert_eq!(state.cursor, 3);
        assert_eq!(
            state.handle_key(key(KeyCode::Home), "12.5", &step),
            DecimalInputAction::None
        );
        assert_eq!(state.cursor, 0);
        assert_eq!(
            state.handle_key(key(KeyCode::End), "12.5", &step),
            DecimalInputAction::None
        );
        assert_eq!(state.cursor, 4);
    }

    #[test]
    fn test_control_chords_ignored() {
        let step = Step::default();
        let mut state = DecimalInputState::new();

        let chord = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::CONTROL);
        assert_eq!(
            state.handle_key(chord, "", &step),
            DecimalInputAction::None
        );
    }
}
