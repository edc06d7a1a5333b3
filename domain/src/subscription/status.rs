//! Subscription status and the messages shown for each outcome

use serde::{Deserialize, Serialize};

/// Shown when the email fails the shape check
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
/// Shown after a 2xx response
pub const SUCCESS_MESSAGE: &str = "Successfully subscribed! Check your email for daily epic quotes.";
/// Shown after a non-2xx response
pub const REJECTED_MESSAGE: &str = "Failed to subscribe. Please try again later.";
/// Shown when the request never got a response
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Lifecycle of one email-submission attempt
///
/// ```text
/// Idle ──submit──> Loading ──> Success ──(delay)──> Idle
///   │                     └──> Error   ──(delay)──> Idle
///   └──invalid email──────────> Error
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Idle => "idle",
            SubscriptionStatus::Loading => "loading",
            SubscriptionStatus::Success => "success",
            SubscriptionStatus::Error => "error",
        }
    }

    /// Success or Error: the attempt is over and waiting to auto-reset
    pub fn is_settled(&self) -> bool {
        matches!(self, SubscriptionStatus::Success | SubscriptionStatus::Error)
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a submitted request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionOutcome {
    /// The service answered with a 2xx status
    Subscribed,
    /// The service answered with a non-2xx status
    Rejected { status: u16 },
    /// No response: DNS, connect, TLS, timeout, etc.
    NetworkFailure(String),
}

impl SubscriptionOutcome {
    /// Status the form moves to for this outcome
    pub fn status(&self) -> SubscriptionStatus {
        match self {
            SubscriptionOutcome::Subscribed => SubscriptionStatus::Success,
            SubscriptionOutcome::Rejected { .. } | SubscriptionOutcome::NetworkFailure(_) => {
                SubscriptionStatus::Error
            }
        }
    }

    /// User-facing message for this outcome
    pub fn message(&self) -> &'static str {
        match self {
            SubscriptionOutcome::Subscribed => SUCCESS_MESSAGE,
            SubscriptionOutcome::Rejected { .. } => REJECTED_MESSAGE,
            SubscriptionOutcome::NetworkFailure(_) => NETWORK_ERROR_MESSAGE,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubscriptionOutcome::Subscribed)
    }
}
