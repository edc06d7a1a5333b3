//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod quote;
mod subscription;
mod tui;

pub use output::FileOutputConfig;
pub use quote::FileQuoteConfig;
pub use subscription::FileSubscriptionConfig;
pub use tui::FileTuiConfig;

use epic_quotes_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Subscription service settings
    pub subscription: FileSubscriptionConfig,
    /// Quote display settings
    pub quote: FileQuoteConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.subscription.validate();

        if self.quote.transition_ms == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroDuration {
                    field: "quote.transition_ms".to_string(),
                },
                "quote.transition_ms: 0 disables the fade, quotes swap instantly",
            ));
        }

        if self.tui.tick_ms == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroDuration {
                    field: "tui.tick_ms".to_string(),
                },
                "tui.tick_ms: 0 would spin the event loop, using 250",
            ));
        }

        issues
    }
}
