//! Presentation-level configuration
//!
//! Configuration for output formatting and TUI behavior.

use epic_quotes_domain::OutputFormat;
use std::time::Duration;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub format: OutputFormat,
}

impl OutputConfig {
    /// Explicit CLI format wins over the configured default
    pub fn resolve_format(&self, cli: Option<OutputFormat>) -> OutputFormat {
        cli.unwrap_or(self.format)
    }
}

/// TUI configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuiConfig {
    /// Interval at which timers are checked and the screen redrawn
    pub tick: Duration,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(250),
        }
    }
}

impl TuiConfig {
    pub fn with_tick(mut self, tick: Duration) -> Self {
        if !tick.is_zero() {
            self.tick = tick;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let config = OutputConfig {
            format: OutputFormat::Json,
        };
        assert_eq!(config.resolve_format(None), OutputFormat::Json);
        assert_eq!(
            config.resolve_format(Some(OutputFormat::Text)),
            OutputFormat::Text
        );
    }

    #[test]
    fn test_zero_tick_keeps_default() {
        let config = TuiConfig::default().with_tick(Duration::ZERO);
        assert_eq!(config.tick, Duration::from_millis(250));
        let config = TuiConfig::default().with_tick(Duration::from_millis(100));
        assert_eq!(config.tick, Duration::from_millis(100));
    }
}
