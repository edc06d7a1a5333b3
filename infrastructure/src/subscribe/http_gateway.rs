//! HTTP subscription gateway (reqwest)
//!
//! Posts the subscription JSON body to the configured endpoint.
//! Any 2xx response is a success; everything else is reported as a
//! rejection or a network error. No retries.

use crate::error::{InfraError, Result};
use async_trait::async_trait;
use epic_quotes_application::{SubscribeError, SubscriptionConfig, SubscriptionGateway};
use epic_quotes_domain::SubscriptionRequest;
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, warn};

/// User agent sent with every request
const USER_AGENT: &str = concat!("epic-quotes/", env!("CARGO_PKG_VERSION"));

/// [`SubscriptionGateway`] backed by a `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpSubscriptionGateway {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSubscriptionGateway {
    /// Build a gateway for `endpoint` with a per-request timeout
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = parse_endpoint(endpoint)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &SubscriptionConfig) -> Result<Self> {
        Self::new(&config.endpoint, config.request_timeout)
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint).map_err(|e| InfraError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(InfraError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

fn classify(error: reqwest::Error) -> SubscribeError {
    if error.is_timeout() {
        SubscribeError::Timeout
    } else {
        SubscribeError::Network(error.to_string())
    }
}

#[async_trait]
impl SubscriptionGateway for HttpSubscriptionGateway {
    async fn subscribe(
        &self,
        request: &SubscriptionRequest,
    ) -> std::result::Result<(), SubscribeError> {
        debug!("POST {}", self.endpoint);

        // `.json()` sets `Content-Type: application/json`
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if status.is_success() {
            debug!("Subscription accepted: {}", status);
            Ok(())
        } else {
            warn!(
                "Subscription rejected: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
            Err(SubscribeError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
