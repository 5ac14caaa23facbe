//! Main layout rendering for the TUI.

use crate::app::App;
use crate::ui::input::Focus;
use crate::ui::widgets::decimal_input::{DecimalInputWidget, StepButton};
use crate::ui::widgets::help::HelpWidget;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Draw the host page: current value header, the input row, footer hints,
/// and any overlays.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with the current value
            Constraint::Length(3), // Field + buttons
            Constraint::Min(0),    // Spacer
            Constraint::Length(3), // Footer
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);
    draw_input_row(frame, app, chunks[1]);
    draw_footer(frame, chunks[3]);

    if app.show_help {
        let help_area = centered_rect(area, 60, 24);
        frame.render_widget(HelpWidget::new(&mut app.help_view_state), help_area);
    }
}

/// Header showing the authoritative value the host owns
fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("Current Decimal Value: {}", app.value))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

/// The decimal field and its two step buttons
fn draw_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(12),    // Input field
            Constraint::Length(15), // Increment button
            Constraint::Length(15), // Decrement button
        ])
        .split(area);

    let field = DecimalInputWidget::new(&app.value, app.input.cursor)
        .title("Amount")
        .placeholder(&app.placeholder)
        .focused(app.focus == Focus::Field);
    frame.render_widget(field, row[0]);

    frame.render_widget(
        StepButton::new("+ Increment").focused(app.focus == Focus::Increment),
        row[1],
    );
    frame.render_widget(
        StepButton::new("- Decrement").focused(app.focus == Focus::Decrement),
        row[2],
    );
}

/// Footer with keybinding hints
fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer_text = " ↑/↓: Step at caret | Tab: Focus | Enter: Press button | F1: Help | Esc: Quit ";
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}

/// Center a fixed-size rect inside `area`, clamped to fit
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
