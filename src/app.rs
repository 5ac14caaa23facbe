//! Application state and main event loop.
//!
//! `App` plays the host-container role: it is the sole owner of the
//! authoritative value string. The decimal input widget only reports
//! candidate values back; `apply_change` is the single place the value is
//! overwritten.

use crate::config::AppConfig;
use crate::domain::{self, Step};
use crate::error::{AppError, Result};
use crate::ui::input::{Action, Focus, InputHandler};
use crate::ui::widgets::decimal_input::{DecimalInputAction, DecimalInputState};
use crate::ui::widgets::help::HelpViewState;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use std::time::{Duration, Instant};

/// Main application state
pub struct App {
    /// The authoritative decimal value (host-owned)
    pub value: String,
    /// Step granularity parsed from config
    pub step: Step,
    /// Hint shown while the field is empty
    pub placeholder: String,

    // UI state
    /// Which control has focus
    pub focus: Focus,
    /// Caret bookkeeping for the field
    pub input: DecimalInputState,
    /// Whether the help overlay is open
    pub show_help: bool,
    /// Help overlay scroll state
    pub help_view_state: HelpViewState,

    config: AppConfig,
    input_handler: InputHandler,
}

impl App {
    /// Create a new application instance. Fails when the configured step
    /// string is not value-shaped.
    pub fn new(config: AppConfig) -> Result<Self> {
        let step = Step::parse(&config.input.step)?;
        let value = config.input.initial_value.clone();
        let input = DecimalInputState::at_end_of(&value);

        Ok(Self {
            value,
            step,
            placeholder: config.input.placeholder.clone(),
            focus: Focus::Field,
            input,
            show_help: false,
            help_view_state: HelpViewState::new(),
            config,
            input_handler: InputHandler::new(),
        })
    }

    /// Adopt a new value reported by the widget or a button press, then
    /// hand the widget its chance to restore the caret.
    fn apply_change(&mut self, next: String) {
        tracing::debug!(from = %self.value, to = %next, "value changed");
        self.value = next;
        self.input.sync(&self.value);
    }

    /// Step the value upward at the field's current caret
    pub fn increment(&mut self) {
        let next = domain::increment(&self.value, &self.step, self.input.cursor);
        self.apply_change(next);
    }

    /// Step the value downward at the field's current caret
    pub fn decrement(&mut self) {
        let next = domain::decrement(&self.value, &self.step, self.input.cursor);
        self.apply_change(next);
    }

    /// Handle a key event. Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // The help overlay captures keys while open
        if self.show_help {
            match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                KeyCode::Up | KeyCode::Char('k') => self.help_view_state.scroll_up(1),
                KeyCode::Down | KeyCode::Char('j') => self.help_view_state.scroll_down(1),
                _ => {}
            }
            return false;
        }

        if let Some(action) = self.input_handler.handle_key(key) {
            match action {
                Action::Quit | Action::Back => return true,
                Action::ToggleHelp => self.show_help = true,
                Action::FocusNext => self.focus = self.focus.next(),
                Action::FocusPrev => self.focus = self.focus.prev(),
                Action::Activate => match self.focus {
                    Focus::Increment => self.increment(),
                    Focus::Decrement => self.decrement(),
                    // Enter/Space on the field presses nothing
                    Focus::Field => {}
                },
            }
            return false;
        }

        // Remaining keys belong to the field when it has focus
        if self.focus == Focus::Field {
            if let DecimalInputAction::Changed(next) =
                self.input.handle_key(key, &self.value, &self.step)
            {
                self.apply_change(next);
            }
        }

        false
    }

    /// Main event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| crate::ui::layout::draw(f, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());

            if event::poll(timeout).map_err(|e| AppError::Terminal(e.to_string()))? {
                match event::read().map_err(|e| AppError::Terminal(e.to_string()))? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            break;
                        }
                    }
                    Event::Resize(width, height) => {
                        // The next draw picks up the new frame area
                        tracing::debug!("Terminal resized to {}x{}", width, height);
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
            }
        }

        Ok(())
    }
}
