//! Subscribe use case.
//!
//! Drives one subscription attempt through the [`SubscriptionForm`] state
//! machine: validate locally, send exactly one request through the
//! [`SubscriptionGateway`], then record the outcome on the form.
//!
//! The interactive UI splits the flow in two ([`SubscriptionForm::submit`]
//! on the event loop, [`SubscribeUseCase::send`] on a background task) while
//! headless callers use [`SubscribeUseCase::execute`].

use crate::config::SubscriptionConfig;
use crate::ports::progress::SubscriptionProgress;
use crate::ports::subscription_gateway::SubscriptionGateway;
use epic_quotes_domain::core::string::mask_email;
use epic_quotes_domain::{
    DomainError, EmailAddress, SubscriptionForm, SubscriptionOutcome, SubscriptionRequest,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Use case for subscribing an email address to the quote list.
#[derive(Clone)]
pub struct SubscribeUseCase {
    gateway: Arc<dyn SubscriptionGateway>,
    config: SubscriptionConfig,
}

impl SubscribeUseCase {
    pub fn new(gateway: Arc<dyn SubscriptionGateway>, config: SubscriptionConfig) -> Self {
        Self { gateway, config }
    }

    pub fn config(&self) -> &SubscriptionConfig {
        &self.config
    }

    /// A fresh form using the configured reset delay
    pub fn new_form(&self) -> SubscriptionForm {
        SubscriptionForm::new().with_reset_after(self.config.reset_after)
    }

    /// Attach the configured list/source metadata to an address
    pub fn build_request(&self, email: EmailAddress) -> SubscriptionRequest {
        SubscriptionRequest::with_metadata(email, &self.config.list, &self.config.source)
    }

    /// Send one request for an already-validated address.
    ///
    /// Never fails: transport and server errors become
    /// [`SubscriptionOutcome`] variants.
    pub async fn send(&self, email: EmailAddress) -> SubscriptionOutcome {
        let masked = mask_email(email.as_str());
        let request = self.build_request(email);
        debug!("Sending subscription for {} to list {}", masked, request.list);

        match self.gateway.subscribe(&request).await {
            Ok(()) => {
                info!("Subscribed {}", masked);
                SubscriptionOutcome::Subscribed
            }
            Err(e) => {
                warn!("Subscription for {} failed: {}", masked, e);
                e.to_outcome()
            }
        }
    }

    /// Run a complete attempt against `form`, reporting every status change.
    ///
    /// Returns the domain error (and sends nothing) if the buffered address
    /// is malformed or a request is already in flight.
    pub async fn execute(
        &self,
        form: &mut SubscriptionForm,
        progress: &dyn SubscriptionProgress,
    ) -> Result<SubscriptionOutcome, DomainError> {
        let email = match form.submit(Instant::now()) {
            Ok(email) => email,
            Err(e) => {
                if e.is_validation() {
                    debug!("Rejected malformed email before sending");
                    progress.on_status_change(form.status(), form.message());
                }
                return Err(e);
            }
        };
        progress.on_status_change(form.status(), form.message());

        let outcome = self.send(email).await;
        form.complete(&outcome, Instant::now());
        progress.on_status_change(form.status(), form.message());

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::ports::subscription_gateway::SubscribeError;
    use async_trait::async_trait;
    use epic_quotes_domain::SubscriptionStatus;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    // === Mock implementations ===

    struct MockGateway {
        response: Result<(), SubscribeError>,
        calls: AtomicUsize,
        requests: Mutex<Vec<SubscriptionRequest>>,
    }

    impl MockGateway {
        fn new(response: Result<(), SubscribeError>) -> Self {
            Self {
                response,
                calls: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SubscriptionGateway for MockGateway {
        async fn subscribe(&self, request: &SubscriptionRequest) -> Result<(), SubscribeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request.clone());
            self.response.clone()
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<(SubscriptionStatus, String)>>,
    }

    impl RecordingProgress {
        fn statuses(&self) -> Vec<SubscriptionStatus> {
            self.events.lock().unwrap().iter().map(|(s, _)| *s).collect()
        }
    }

    impl SubscriptionProgress for RecordingProgress {
        fn on_status_change(&self, status: SubscriptionStatus, message: &str) {
            self.events
                .lock()
                .unwrap()
                .push((status, message.to_string()));
        }
    }

    fn use_case(gateway: Arc<MockGateway>) -> SubscribeUseCase {
        SubscribeUseCase::new(gateway, SubscriptionConfig::default())
    }

    #[tokio::test]
    async fn test_success_flow() {
        let gateway = Arc::new(MockGateway::new(Ok(())));
        let uc = use_case(gateway.clone());
        let progress = RecordingProgress::default();
        let mut form = uc.new_form();
        form.set_email("user@example.com");

        assert_eq!(form.status(), SubscriptionStatus::Idle);
        let outcome = uc.execute(&mut form, &progress).await.unwrap();

        assert_eq!(outcome, SubscriptionOutcome::Subscribed);
        assert_eq!(
            progress.statuses(),
            vec![SubscriptionStatus::Loading, SubscriptionStatus::Success]
        );
        assert_eq!(form.status(), SubscriptionStatus::Success);
        assert_eq!(
            form.message(),
            "Successfully subscribed! Check your email for daily epic quotes."
        );
        assert!(form.email().is_empty());
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_request_carries_metadata() {
        let gateway = Arc::new(MockGateway::new(Ok(())));
        let uc = use_case(gateway.clone());
        let mut form = uc.new_form();
        form.set_email("user@example.com");
        uc.execute(&mut form, &NoProgress).await.unwrap();

        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].email.as_str(), "user@example.com");
        assert_eq!(requests[0].list, "epic-quotes");
        assert_eq!(requests[0].source, "epic-quote-generator");
    }

    #[tokio::test]
    async fn test_server_rejection() {
        let gateway = Arc::new(MockGateway::new(Err(SubscribeError::Rejected {
            status: 500,
        })));
        let uc = use_case(gateway.clone());
        let mut form = uc.new_form();
        form.set_email("user@example.com");

        let outcome = uc.execute(&mut form, &NoProgress).await.unwrap();
        assert_eq!(outcome, SubscriptionOutcome::Rejected { status: 500 });
        assert_eq!(form.status(), SubscriptionStatus::Error);
        assert_eq!(form.message(), "Failed to subscribe. Please try again later.");
        assert_eq!(form.email(), "user@example.com");
    }

    #[tokio::test]
    async fn test_network_failure() {
        let gateway = Arc::new(MockGateway::new(Err(SubscribeError::Network(
            "connection refused".into(),
        ))));
        let uc = use_case(gateway.clone());
        let mut form = uc.new_form();
        form.set_email("user@example.com");

        uc.execute(&mut form, &NoProgress).await.unwrap();
        assert_eq!(form.status(), SubscriptionStatus::Error);
        assert_eq!(
            form.message(),
            "Network error. Please check your connection and try again."
        );
    }

    #[tokio::test]
    async fn test_invalid_email_never_reaches_gateway() {
        let gateway = Arc::new(MockGateway::new(Ok(())));
        let uc = use_case(gateway.clone());
        let progress = RecordingProgress::default();
        let mut form = uc.new_form();
        form.set_email("not-an-email");

        let err = uc.execute(&mut form, &progress).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(gateway.calls(), 0);
        assert_eq!(progress.statuses(), vec![SubscriptionStatus::Error]);
        assert_eq!(form.message(), "Please enter a valid email address");
    }

    #[tokio::test]
    async fn test_valid_short_address_is_sent() {
        let gateway = Arc::new(MockGateway::new(Ok(())));
        let uc = use_case(gateway.clone());
        let mut form = uc.new_form();
        form.set_email("a@b.co");
        uc.execute(&mut form, &NoProgress).await.unwrap();
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_status_resets_after_configured_delay() {
        let gateway = Arc::new(MockGateway::new(Err(SubscribeError::Timeout)));
        let config = SubscriptionConfig::default().with_reset_after(Duration::from_secs(5));
        let uc = SubscribeUseCase::new(gateway, config);
        let mut form = uc.new_form();
        form.set_email("user@example.com");
        uc.execute(&mut form, &NoProgress).await.unwrap();

        let resets_at = form.resets_at().unwrap();
        assert!(!form.expire(resets_at - Duration::from_millis(1)));
        assert_eq!(form.status(), SubscriptionStatus::Error);
        assert!(form.expire(resets_at));
        assert_eq!(form.status(), SubscriptionStatus::Idle);
        assert!(form.message().is_empty());
    }

    #[tokio::test]
    async fn test_send_maps_errors_to_outcomes() {
        let gateway = Arc::new(MockGateway::new(Err(SubscribeError::Rejected {
            status: 422,
        })));
        let uc = use_case(gateway);
        let email = EmailAddress::parse("user@example.com").unwrap();
        assert_eq!(
            uc.send(email).await,
            SubscriptionOutcome::Rejected { status: 422 }
        );
    }
}
