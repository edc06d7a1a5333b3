//! TUI state: the single source of truth for rendering

use super::mode::Focus;
use epic_quotes_domain::{Quote, QuoteDeck, SubscriptionForm};
use std::time::Instant;

/// Everything the widgets need to draw a frame
pub struct TuiState {
    /// Displayed quote and its transition
    pub deck: QuoteDeck,
    /// Email input and subscription status
    pub form: SubscriptionForm,
    pub focus: Focus,
    pub show_help: bool,
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(deck: QuoteDeck, form: SubscriptionForm) -> Self {
        Self {
            deck,
            form,
            focus: Focus::default(),
            show_help: false,
            should_quit: false,
        }
    }

    pub fn current_quote(&self) -> &'static Quote {
        self.deck.current()
    }

    /// Earliest pending timer: a quote commit or a status reset
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.deck.commits_at(), self.form.resets_at()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Label of the generate control
    pub fn generate_label(&self) -> &'static str {
        if self.deck.is_animating() {
            "Generating..."
        } else {
            "Generate New Quote"
        }
    }

    /// Label of the submit control
    pub fn subscribe_label(&self) -> &'static str {
        if self.form.is_loading() {
            "Subscribing..."
        } else {
            "Subscribe"
        }
    }

    /// Key hints for the status bar
    pub fn key_hints(&self) -> &'static str {
        match self.focus {
            Focus::Quote => "g/Space:generate  Tab:subscribe  ?:help  q:quit",
            Focus::Subscribe if self.form.is_loading() => {
                "waiting for server...  Tab:quote  Ctrl+C:quit"
            }
            Focus::Subscribe => "Enter:subscribe  Esc/Tab:quote  Ctrl+C:quit",
        }
    }
}
