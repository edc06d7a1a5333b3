//! Quote display parameters.

use epic_quotes_domain::DEFAULT_TRANSITION;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Controls the fade between two quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteConfig {
    pub transition: Duration,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            transition: DEFAULT_TRANSITION,
        }
    }
}

impl QuoteConfig {
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }
}
