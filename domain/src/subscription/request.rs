//! Outbound subscription payload

use super::email::EmailAddress;
use serde::Serialize;

/// Mailing list every subscriber is added to
pub const DEFAULT_LIST: &str = "epic-quotes";
/// Identifies this application to the subscription service
pub const DEFAULT_SOURCE: &str = "epic-quote-generator";

/// JSON body of the subscription POST
///
/// Serializes to `{"email": ..., "list": ..., "source": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionRequest {
    pub email: EmailAddress,
    pub list: String,
    pub source: String,
}

impl SubscriptionRequest {
    /// Request with the default list and source metadata
    pub fn new(email: EmailAddress) -> Self {
        Self::with_metadata(email, DEFAULT_LIST, DEFAULT_SOURCE)
    }

    pub fn with_metadata(
        email: EmailAddress,
        list: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            email,
            list: list.into(),
            source: source.into(),
        }
    }
}
