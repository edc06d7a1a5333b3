//! TUI rendering: all rendering logic extracted from TuiApp.

use super::state::TuiState;
use super::widgets::{
    MainLayout, header::HeaderWidget, quote_card::QuoteCardWidget, status_bar::StatusBarWidget,
    subscribe::SubscribeWidget,
};

/// Render all widgets
pub(super) fn render(frame: &mut ratatui::Frame, state: &TuiState) {
    let layout = MainLayout::compute(frame.area());

    frame.render_widget(HeaderWidget::new(state), layout.header);
    frame.render_widget(QuoteCardWidget::new(state), layout.quote);
    frame.render_widget(SubscribeWidget::new(state), layout.subscribe);
    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

    if state.show_help {
        let help_area = MainLayout::centered_overlay(60, 60, frame.area());
        frame.render_widget(ratatui::widgets::Clear, help_area);
        render_help(frame, help_area);
    }
}

fn render_help(frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
    use ratatui::style::{Color, Modifier, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

    let lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Quote:"),
        Line::from("  g/Space/Enter  Generate a new quote"),
        Line::from("  Tab            Focus the email input"),
        Line::from("  ?              Toggle this help"),
        Line::from("  q              Quit"),
        Line::from(""),
        Line::from("Subscribe:"),
        Line::from("  Enter          Subscribe"),
        Line::from("  Backspace      Delete character"),
        Line::from("  Left/Right     Move cursor"),
        Line::from("  Home/End       Jump to start/end"),
        Line::from("  Esc/Tab        Back to the quote"),
        Line::from(""),
        Line::from("  Ctrl+C         Quit from anywhere"),
        Line::from(""),
        Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_text;
    use epic_quotes_domain::{QuoteCatalog, QuoteDeck, SubscriptionForm};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(state: &TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_full_frame() {
        let state = TuiState::new(QuoteDeck::new(QuoteCatalog::builtin()), SubscriptionForm::new());
        let content = draw(&state);
        assert!(content.contains("Epic Quote Generator"));
        assert!(content.contains("Get Daily Epic Quotes"));
        assert!(content.contains("QUOTE"));
        assert!(content.contains("Powered by Subscribe.dev"));
        assert!(!content.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_help_overlay() {
        let mut state =
            TuiState::new(QuoteDeck::new(QuoteCatalog::builtin()), SubscriptionForm::new());
        state.show_help = true;
        let content = draw(&state);
        assert!(content.contains("Keyboard Shortcuts"));
        assert!(content.contains("Backspace"));
    }

    #[test]
    fn test_short_terminal_renders() {
        let mut state =
            TuiState::new(QuoteDeck::new(QuoteCatalog::builtin()), SubscriptionForm::new());
        for show_help in [false, true] {
            state.show_help = show_help;
            for height in 1..=13 {
                let mut terminal = Terminal::new(TestBackend::new(40, height)).unwrap();
                terminal.draw(|frame| render(frame, &state)).unwrap();
            }
        }
    }
}
