//! Quote card widget: current quote, author, category badge and the
//! generate control. Rendered dimmed while a transition is running.

use crate::tui::mode::Focus;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct QuoteCardWidget<'a> {
    state: &'a TuiState,
}

impl<'a> QuoteCardWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for QuoteCardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let quote = self.state.current_quote();
        let animating = self.state.deck.is_animating();
        let focused = self.state.focus == Focus::Quote;

        let (text_style, author_style, badge_style) = if animating {
            let dim = Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM);
            (dim, dim, dim)
        } else {
            (
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::ITALIC),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            )
        };

        let button_style = if animating {
            Style::default().fg(Color::DarkGray)
        } else if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Magenta)
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(format!("\u{201c}{}\u{201d}", quote.text), text_style)),
            Line::from(""),
            Line::from(Span::styled(format!("— {}", quote.author), author_style)),
            Line::from(""),
            Line::from(Span::styled(format!(" {} ", quote.category), badge_style)),
            Line::from(""),
            Line::from(Span::styled(
                format!("[ {} ]", self.state.generate_label()),
                button_style,
            )),
        ];

        let border_color = if focused { Color::Magenta } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Quote ")
            .border_style(Style::default().fg(border_color));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_text;
    use epic_quotes_domain::{QuoteCatalog, QuoteDeck, SubscriptionForm};
    use std::time::Instant;

    fn render(state: &TuiState) -> String {
        let area = Rect::new(0, 0, 120, 14);
        let mut buf = Buffer::empty(area);
        QuoteCardWidget::new(state).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_renders_current_quote() {
        let state = TuiState::new(QuoteDeck::new(QuoteCatalog::builtin()), SubscriptionForm::new());
        let quote = state.current_quote();
        let content = render(&state);
        assert!(content.contains(quote.author));
        assert!(content.contains(quote.category));
        assert!(content.contains("Generate New Quote"));
    }

    #[test]
    fn test_button_label_while_animating() {
        let mut state =
            TuiState::new(QuoteDeck::new(QuoteCatalog::builtin()), SubscriptionForm::new());
        state.deck.begin_transition(Instant::now());
        assert!(render(&state).contains("Generating..."));
    }
}
