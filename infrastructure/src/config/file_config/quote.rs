//! Quote display configuration from TOML (`[quote]` section)

use epic_quotes_application::QuoteConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw quote configuration from TOML
///
/// ```toml
/// [quote]
/// transition_ms = 300
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuoteConfig {
    /// Fade duration between two quotes, in milliseconds
    pub transition_ms: u64,
}

impl Default for FileQuoteConfig {
    fn default() -> Self {
        Self { transition_ms: 300 }
    }
}

impl FileQuoteConfig {
    pub fn to_quote_config(&self) -> QuoteConfig {
        QuoteConfig::default().with_transition(Duration::from_millis(self.transition_ms))
    }
}
