//! TUI widgets: ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (4) ────────────────────────────────────┐
//! ├── Quote card (flex) ─────────────────────────────┤
//! ├── Subscribe panel (8) ───────────────────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod header;
pub mod quote_card;
pub mod status_bar;
pub mod subscribe;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the subscribe panel including borders
const SUBSCRIBE_HEIGHT: u16 = 8;

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub quote: Rect,
    pub subscribe: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(7),
                Constraint::Length(SUBSCRIBE_HEIGHT),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            quote: chunks[1],
            subscribe: chunks[2],
            status_bar: chunks[3],
        }
    }

    /// Create a centered overlay area (for help)
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}

/// Collect a buffer's symbols into one string (test helper)
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    buf.content().iter().map(|c| c.symbol()).collect()
}
