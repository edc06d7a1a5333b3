//! TUI configuration from TOML (`[tui]` section)

use serde::{Deserialize, Serialize};

/// Raw TUI configuration from TOML
///
/// ```toml
/// [tui]
/// tick_ms = 250
/// log_file = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Redraw/timer interval in milliseconds
    pub tick_ms: u64,
    /// Write logs to a file while the TUI owns the terminal
    pub log_file: bool,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            log_file: true,
        }
    }
}
