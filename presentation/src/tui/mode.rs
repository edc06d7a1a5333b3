//! TUI focus system
//!
//! The screen has two interactive regions:
//! - Quote: generate new quotes, open help, quit
//! - Subscribe: edit the email buffer and submit it
//!
//! `Tab` moves focus between them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

/// Which region receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Quote,
    Subscribe,
}

impl Focus {
    /// Indicator string for the status bar
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Quote => "QUOTE",
            Self::Subscribe => "SUBSCRIBE",
        }
    }

    /// Indicator color for the status bar
    pub fn color(&self) -> Color {
        match self {
            Self::Quote => Color::Magenta,
            Self::Subscribe => Color::Green,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Quote => Self::Subscribe,
            Self::Subscribe => Self::Quote,
        }
    }
}

/// Semantic action derived from a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    ToggleFocus,
    /// Leave the email input (Esc)
    FocusQuote,
    GenerateQuote,
    ToggleHelp,

    // Email input
    Submit,
    InsertChar(char),
    DeleteChar,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
}

/// Map a key event to an action based on the focused region
pub fn handle_key_event(focus: Focus, key: KeyEvent) -> KeyAction {
    // Global bindings
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return KeyAction::Quit,
        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => return KeyAction::ToggleFocus,
        _ => {}
    }

    match focus {
        Focus::Quote => handle_quote_key(key),
        Focus::Subscribe => handle_subscribe_key(key),
    }
}

fn handle_quote_key(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
        (KeyCode::Char('g'), KeyModifiers::NONE)
        | (KeyCode::Char(' '), KeyModifiers::NONE)
        | (KeyCode::Enter, _) => KeyAction::GenerateQuote,
        (KeyCode::Char('?'), _) => KeyAction::ToggleHelp,
        _ => KeyAction::None,
    }
}

fn handle_subscribe_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::FocusQuote,
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Backspace => KeyAction::DeleteChar,
        KeyCode::Left => KeyAction::CursorLeft,
        KeyCode::Right => KeyAction::CursorRight,
        KeyCode::Home => KeyAction::CursorHome,
        KeyCode::End => KeyAction::CursorEnd,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            KeyAction::InsertChar(c)
        }
        _ => KeyAction::None,
    }
}
