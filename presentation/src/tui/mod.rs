//! TUI (Text User Interface) module for epic-quotes
//!
//! A single-screen ratatui interface: the current quote with its generate
//! control on top, the daily-quote subscription form below.

mod app;
mod app_render;
mod event;
mod mode;
mod state;
mod widgets;

pub use app::TuiApp;
pub use event::{TuiCommand, TuiEvent};
pub use mode::{Focus, KeyAction};
pub use state::TuiState;
