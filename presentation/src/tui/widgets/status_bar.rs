//! Status bar widget: focus indicator + key hints

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Squeezed out by a short terminal
        if area.is_empty() {
            return;
        }

        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let focus = self.state.focus;

        // Left: focus indicator
        let focus_text = focus.indicator();
        let focus_style = Style::default()
            .fg(Color::Black)
            .bg(focus.color())
            .add_modifier(Modifier::BOLD);
        let focus_line = Line::from(vec![Span::styled(format!(" {} ", focus_text), focus_style)]);
        let focus_width = focus_text.len() as u16 + 2; // padding
        buf.set_line(area.x, area.y, &focus_line, focus_width);

        // Right: key hints, right-aligned
        let hints = self.state.key_hints();
        let hints_width = hints.len() as u16;
        let right_x = area.right().saturating_sub(hints_width + 1);
        if right_x > area.x + focus_width {
            let right_line = Line::from(vec![Span::styled(
                hints,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            )]);
            buf.set_line(right_x, area.y, &right_line, hints_width + 1);
        }
    }
}
