//! Subscription parameters: where and how the form posts.

use epic_quotes_domain::{DEFAULT_LIST, DEFAULT_RESET_AFTER, DEFAULT_SOURCE};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default subscription service endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.subscribe.dev/subscribe";

/// Default time allowed for the subscription request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Subscription use case parameters.
///
/// `list` and `source` are sent as fixed metadata with every request.
/// `reset_after` controls how long Success/Error stay visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionConfig {
    pub endpoint: String,
    pub list: String,
    pub source: String,
    /// Upper bound on one request; exceeding it counts as a network error.
    pub request_timeout: Duration,
    pub reset_after: Duration,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            list: DEFAULT_LIST.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            reset_after: DEFAULT_RESET_AFTER,
        }
    }
}

impl SubscriptionConfig {
    // ==================== Builder Methods ====================

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_list(mut self, list: impl Into<String>) -> Self {
        self.list = list.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_reset_after(mut self, reset_after: Duration) -> Self {
        self.reset_after = reset_after;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SubscriptionConfig::default();
        assert_eq!(config.endpoint, "https://api.subscribe.dev/subscribe");
        assert_eq!(config.list, "epic-quotes");
        assert_eq!(config.source, "epic-quote-generator");
        assert_eq!(config.reset_after, Duration::from_secs(5));
    }

    #[test]
    fn test_builder_chain() {
        let config = SubscriptionConfig::default()
            .with_endpoint("http://localhost:8080/subscribe")
            .with_list("weekly")
            .with_request_timeout(Duration::from_secs(2));
        assert_eq!(config.endpoint, "http://localhost:8080/subscribe");
        assert_eq!(config.list, "weekly");
        assert_eq!(config.source, "epic-quote-generator");
        assert_eq!(config.request_timeout, Duration::from_secs(2));
    }
}
