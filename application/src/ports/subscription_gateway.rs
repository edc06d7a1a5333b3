//! Subscription gateway port
//!
//! Defines the interface for talking to the third-party subscription service.

use async_trait::async_trait;
use epic_quotes_domain::{SubscriptionOutcome, SubscriptionRequest};
use thiserror::Error;

/// Errors that can occur while delivering a subscription request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubscribeError {
    /// The service responded, but not with a 2xx status
    #[error("Subscription rejected with HTTP {status}")]
    Rejected { status: u16 },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout")]
    Timeout,
}

impl SubscribeError {
    /// Map the error onto the form-level outcome
    pub fn to_outcome(&self) -> SubscriptionOutcome {
        match self {
            SubscribeError::Rejected { status } => {
                SubscriptionOutcome::Rejected { status: *status }
            }
            SubscribeError::Network(reason) => SubscriptionOutcome::NetworkFailure(reason.clone()),
            SubscribeError::Timeout => SubscriptionOutcome::NetworkFailure("timeout".to_string()),
        }
    }
}

/// Gateway for the subscription service
///
/// This port defines how the application layer submits an email address.
/// Implementations (adapters) live in the infrastructure layer.
/// Exactly one outbound request per call; no retries.
#[async_trait]
pub trait SubscriptionGateway: Send + Sync {
    async fn subscribe(&self, request: &SubscriptionRequest) -> Result<(), SubscribeError>;
}
