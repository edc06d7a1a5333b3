//! Subscribe panel widget: email input, submit control and status message

use crate::tui::mode::Focus;
use crate::tui::state::TuiState;
use epic_quotes_domain::SubscriptionStatus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const PLACEHOLDER: &str = "Enter your email";

pub struct SubscribeWidget<'a> {
    state: &'a TuiState,
}

impl<'a> SubscribeWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    /// Input line with a block cursor when editable
    fn input_line(&self) -> Line<'a> {
        let form = &self.state.form;
        let editable = self.state.focus == Focus::Subscribe && !form.is_loading();
        let text_style = if form.is_loading() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![Span::styled("✉ ", Style::default().fg(Color::Cyan))];

        if form.email().is_empty() && !editable {
            spans.push(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)));
            return Line::from(spans);
        }

        let email = form.email();
        let cursor = form.cursor().min(email.len());
        let (before, rest) = email.split_at(cursor);
        spans.push(Span::styled(before.to_string(), text_style));

        if editable {
            let mut chars = rest.chars();
            let at_cursor = chars.next().map(String::from).unwrap_or_else(|| " ".into());
            spans.push(Span::styled(
                at_cursor,
                Style::default().add_modifier(Modifier::REVERSED),
            ));
            spans.push(Span::styled(chars.as_str().to_string(), text_style));
            if email.is_empty() {
                spans.push(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)));
            }
        } else {
            spans.push(Span::styled(rest.to_string(), text_style));
        }

        Line::from(spans)
    }

    fn message_line(&self) -> Line<'a> {
        let form = &self.state.form;
        let style = match form.status() {
            SubscriptionStatus::Success => Style::default().fg(Color::Green),
            SubscriptionStatus::Error => Style::default().fg(Color::Red),
            _ => Style::default(),
        };
        Line::from(Span::styled(form.message().to_string(), style))
    }
}

impl<'a> Widget for SubscribeWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Subscribe;
        let loading = self.state.form.is_loading();

        let button_style = if loading {
            Style::default().fg(Color::DarkGray)
        } else if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };

        let lines = vec![
            Line::from(Span::styled(
                "Subscribe to receive inspiring quotes delivered to your inbox every day",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            self.input_line(),
            Line::from(Span::styled(
                format!("[ {} ]", self.state.subscribe_label()),
                button_style,
            )),
            Line::from(""),
            self.message_line(),
        ];

        let border_color = if focused { Color::Green } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Get Daily Epic Quotes ")
            .border_style(Style::default().fg(border_color));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_text;
    use epic_quotes_domain::{QuoteCatalog, QuoteDeck, SubscriptionForm, SubscriptionOutcome};
    use std::time::Instant;

    fn state() -> TuiState {
        TuiState::new(QuoteDeck::new(QuoteCatalog::builtin()), SubscriptionForm::new())
    }

    fn render(state: &TuiState) -> String {
        let area = Rect::new(0, 0, 100, 8);
        let mut buf = Buffer::empty(area);
        SubscribeWidget::new(state).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_placeholder_when_empty() {
        let content = render(&state());
        assert!(content.contains("Enter your email"));
        assert!(content.contains("[ Subscribe ]"));
    }

    #[test]
    fn test_shows_typed_email() {
        let mut state = state();
        state.focus = Focus::Subscribe;
        state.form.set_email("user@example.com");
        let content = render(&state);
        assert!(content.contains("user@example.com"));
        assert!(!content.contains("Enter your email"));
    }

    #[test]
    fn test_loading_label() {
        let mut state = state();
        state.form.set_email("user@example.com");
        state.form.submit(Instant::now()).unwrap();
        assert!(render(&state).contains("Subscribing..."));
    }

    #[test]
    fn test_shows_status_message() {
        let mut state = state();
        state.form.set_email("user@example.com");
        let now = Instant::now();
        state.form.submit(now).unwrap();
        state
            .form
            .complete(&SubscriptionOutcome::Rejected { status: 500 }, now);
        assert!(render(&state).contains("Failed to subscribe"));
    }
}
