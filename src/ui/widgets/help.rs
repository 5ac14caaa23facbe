//! Help view widget showing all keybindings.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

/// Help categories
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Editing",
        &[
            ("0-9 - .", "Type into the field (invalid text is rejected)"),
            ("Backspace/Del", "Delete around the caret"),
            ("←/→", "Move the caret"),
            ("Home/End", "Jump to start / end"),
        ],
    ),
    (
        "Stepping",
        &[
            ("↑", "Increment at the caret (integer or fractional side)"),
            ("↓", "Decrement at the caret"),
            ("Enter/Space", "Activate the focused button"),
        ],
    ),
    (
        "Focus",
        &[
            ("Tab", "Next control (field → [+] → [-])"),
            ("Shift+Tab", "Previous control"),
        ],
    ),
    (
        "Application",
        &[
            ("F1 / ?", "Toggle this help"),
            ("Esc", "Close help / quit"),
            ("Ctrl+C", "Quit"),
        ],
    ),
];

/// State for the help view
#[derive(Debug, Default, Clone)]
pub struct HelpViewState {
    /// Current scroll offset (in lines)
    pub scroll_offset: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Visible height
    pub visible_height: usize,
}

impl HelpViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(n);
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        let max_offset = self.total_lines.saturating_sub(self.visible_height);
        self.scroll_offset = (self.scroll_offset + n).min(max_offset);
    }
}

/// Help view widget
pub struct HelpWidget<'a> {
    scroll_offset: usize,
    state: &'a mut HelpViewState,
}

impl<'a> HelpWidget<'a> {
    pub fn new(state: &'a mut HelpViewState) -> Self {
        Self {
            scroll_offset: state.scroll_offset,
            state,
        }
    }

    /// Build help text lines
    fn build_lines() -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                "  decimal-tui Help  ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "A decimal input field: the caret side of the '.' decides which part steps.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
        ];

        for (section_name, bindings) in HELP_SECTIONS {
            lines.push(Line::from(Span::styled(
                format!("─── {} ───", section_name),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));

            for (key, description) in *bindings {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:14}", key), Style::default().fg(Color::Green)),
                    Span::raw(*description),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("  Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Green)),
            Span::styled(" to close help", Style::default().fg(Color::DarkGray)),
        ]));

        lines
    }
}

impl Widget for HelpWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let lines = Self::build_lines();

        self.state.total_lines = lines.len();
        self.state.visible_height = area.height.saturating_sub(2) as usize;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help (F1) ");

        let inner = block.inner(area);
        block.render(area, buf);

        let visible_lines: Vec<Line> = lines
            .into_iter()
            .skip(self.scroll_offset)
            .take(inner.height as usize)
            .collect();

        Paragraph::new(visible_lines).render(inner, buf);

        // Scrollbar only when the content exceeds the view
        if self.state.total_lines > self.state.visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(self.state.total_lines).position(self.scroll_offset);

            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"));

            let scrollbar_area = Rect {
                x: area.x + area.width.saturating_sub(1),
                y: area.y + 1,
                width: 1,
                height: area.height.saturating_sub(2),
            };

            scrollbar.render(scrollbar_area, buf, &mut scrollbar_state);
        }
    }
}
