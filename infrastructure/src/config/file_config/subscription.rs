//! Subscription configuration from TOML (`[subscription]` section)

use epic_quotes_application::{DEFAULT_ENDPOINT, SubscriptionConfig};
use epic_quotes_domain::{ConfigIssue, ConfigIssueCode, DEFAULT_LIST, DEFAULT_SOURCE};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw subscription configuration from TOML
///
/// # Example
///
/// ```toml
/// [subscription]
/// endpoint = "https://api.subscribe.dev/subscribe"
/// list = "epic-quotes"
/// source = "epic-quote-generator"
/// timeout_secs = 10
/// reset_after_ms = 5000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSubscriptionConfig {
    /// Subscription service URL
    pub endpoint: String,
    /// Mailing list name sent with every request
    pub list: String,
    /// Source tag sent with every request
    pub source: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// How long Success/Error stay visible, in milliseconds
    pub reset_after_ms: u64,
}

impl Default for FileSubscriptionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            list: DEFAULT_LIST.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            timeout_secs: 10,
            reset_after_ms: 5_000,
        }
    }
}

impl FileSubscriptionConfig {
    /// Convert to the application config. Empty or zero fields fall back to defaults.
    pub fn to_subscription_config(&self) -> SubscriptionConfig {
        let defaults = SubscriptionConfig::default();
        let non_empty = |value: &str, fallback: String| {
            if value.trim().is_empty() {
                fallback
            } else {
                value.to_string()
            }
        };

        SubscriptionConfig {
            endpoint: non_empty(&self.endpoint, defaults.endpoint),
            list: non_empty(&self.list, defaults.list),
            source: non_empty(&self.source, defaults.source),
            request_timeout: if self.timeout_secs == 0 {
                defaults.request_timeout
            } else {
                Duration::from_secs(self.timeout_secs)
            },
            reset_after: if self.reset_after_ms == 0 {
                defaults.reset_after
            } else {
                Duration::from_millis(self.reset_after_ms)
            },
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("subscription.endpoint", &self.endpoint),
            ("subscription.list", &self.list),
            ("subscription.source", &self.source),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    format!("{}: empty value, falling back to the default", field),
                ));
            }
        }

        let endpoint = self.endpoint.trim();
        if !endpoint.is_empty()
            && !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidEndpoint {
                    value: self.endpoint.clone(),
                },
                format!(
                    "subscription.endpoint: '{}' is not an http(s) URL",
                    self.endpoint
                ),
            ));
        }

        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroDuration {
                    field: "subscription.timeout_secs".to_string(),
                },
                "subscription.timeout_secs: 0 is not allowed, using the default",
            ));
        }

        if self.reset_after_ms == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroDuration {
                    field: "subscription.reset_after_ms".to_string(),
                },
                "subscription.reset_after_ms: 0 hides the result at once, using the default",
            ));
        }

        issues
    }
}
