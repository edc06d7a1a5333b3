//! Header widget: title, subtitle and credit line

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let quote_count = self.state.deck.catalog().len();

        let lines = vec![
            Line::from(Span::styled(
                "Epic Quote Generator",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    "Fuel your inspiration with powerful quotes",
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("  ({} quotes)", quote_count),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(Span::styled(
                "Powered by Subscribe.dev",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_text;
    use epic_quotes_domain::{QuoteCatalog, QuoteDeck, SubscriptionForm};

    #[test]
    fn test_renders_title_and_subtitle() {
        let state = TuiState::new(QuoteDeck::new(QuoteCatalog::builtin()), SubscriptionForm::new());
        let area = Rect::new(0, 0, 80, 4);
        let mut buf = Buffer::empty(area);
        HeaderWidget::new(&state).render(area, &mut buf);

        let content = buffer_text(&buf);
        assert!(content.contains("Epic Quote Generator"));
        assert!(content.contains("Fuel your inspiration"));
        assert!(content.contains("Powered by Subscribe.dev"));
    }
}
