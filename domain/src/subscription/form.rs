//! Subscription form state machine
//!
//! Owns the email input buffer together with the status/message pair the
//! user sees. All transitions take the current [`Instant`] explicitly so the
//! auto-reset timer can be driven by any clock.

use super::email::EmailAddress;
use super::status::{INVALID_EMAIL_MESSAGE, SubscriptionOutcome, SubscriptionStatus};
use crate::core::error::DomainError;
use std::time::{Duration, Instant};

/// How long Success/Error stay on screen before reverting to Idle
pub const DEFAULT_RESET_AFTER: Duration = Duration::from_secs(5);

/// Email input, status and message of the subscription form
#[derive(Debug, Clone)]
pub struct SubscriptionForm {
    email: String,
    cursor: usize,
    status: SubscriptionStatus,
    message: String,
    settled_at: Option<Instant>,
    reset_after: Duration,
}

impl Default for SubscriptionForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            cursor: 0,
            status: SubscriptionStatus::Idle,
            message: String::new(),
            settled_at: None,
            reset_after: DEFAULT_RESET_AFTER,
        }
    }
}

impl SubscriptionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reset_after(mut self, reset_after: Duration) -> Self {
        self.reset_after = reset_after;
        self
    }

    // -- Accessors --

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn status(&self) -> SubscriptionStatus {
        self.status
    }

    /// Current user-facing message; empty while Idle or Loading
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Submit control and input are disabled while a request is in flight
    pub fn is_loading(&self) -> bool {
        self.status == SubscriptionStatus::Loading
    }

    // -- Input editing (ignored while Loading) --

    pub fn set_email(&mut self, email: impl Into<String>) {
        if self.is_loading() {
            return;
        }
        self.email = email.into();
        self.cursor = self.email.len();
    }

    pub fn insert_char(&mut self, c: char) {
        if self.is_loading() {
            return;
        }
        self.email.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if self.is_loading() || self.cursor == 0 {
            return;
        }
        let prev_char_len = self.email[..self.cursor]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.email.remove(self.cursor - prev_char_len);
        self.cursor -= prev_char_len;
    }

    pub fn cursor_left(&mut self) {
        let prev_char_len = self.email[..self.cursor]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.cursor -= prev_char_len;
    }

    pub fn cursor_right(&mut self) {
        let next_char_len = self.email[self.cursor..]
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.cursor += next_char_len;
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.email.len();
    }

    // -- Transitions --

    /// Validate the buffer and move to Loading.
    ///
    /// On a malformed address the form moves to Error with the validation
    /// message and the returned error tells the caller not to send anything.
    pub fn submit(&mut self, now: Instant) -> Result<EmailAddress, DomainError> {
        if self.is_loading() {
            return Err(DomainError::SubmissionInFlight);
        }

        match EmailAddress::parse(self.email.clone()) {
            Ok(email) => {
                self.status = SubscriptionStatus::Loading;
                self.message.clear();
                self.settled_at = None;
                Ok(email)
            }
            Err(e) => {
                self.settle(SubscriptionStatus::Error, INVALID_EMAIL_MESSAGE, now);
                Err(e)
            }
        }
    }

    /// Record how the in-flight request ended.
    ///
    /// Returns false if no request was in flight.
    pub fn complete(&mut self, outcome: &SubscriptionOutcome, now: Instant) -> bool {
        if !self.is_loading() {
            return false;
        }
        if outcome.is_success() {
            self.email.clear();
            self.cursor = 0;
        }
        self.settle(outcome.status(), outcome.message(), now);
        true
    }

    /// Revert to Idle once the reset delay has elapsed since settling.
    ///
    /// Returns true if the form was reset.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.settled_at {
            Some(at) if now.saturating_duration_since(at) >= self.reset_after => {
                self.status = SubscriptionStatus::Idle;
                self.message.clear();
                self.settled_at = None;
                true
            }
            _ => false,
        }
    }

    /// When the current Success/Error will revert, if it will
    pub fn resets_at(&self) -> Option<Instant> {
        self.settled_at.map(|at| at + self.reset_after)
    }

    fn settle(&mut self, status: SubscriptionStatus, message: &str, now: Instant) {
        self.status = status;
        self.message = message.to_string();
        self.settled_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscription::status::{
        NETWORK_ERROR_MESSAGE, REJECTED_MESSAGE, SUCCESS_MESSAGE,
    };

    fn form_with(email: &str) -> SubscriptionForm {
        let mut form = SubscriptionForm::new();
        form.set_email(email);
        form
    }

    #[test]
    fn test_insert_and_delete() {
        let mut form = SubscriptionForm::new();
        form.insert_char('h');
        form.insert_char('i');
        assert_eq!(form.email(), "hi");
        assert_eq!(form.cursor(), 2);

        form.delete_char();
        assert_eq!(form.email(), "h");
        assert_eq!(form.cursor(), 1);
    }

    #[test]
    fn test_cursor_movement() {
        let mut form = form_with("abc");
        assert_eq!(form.cursor(), 3);

        form.cursor_left();
        assert_eq!(form.cursor(), 2);
        form.insert_char('X');
        assert_eq!(form.email(), "abXc");

        form.cursor_home();
        assert_eq!(form.cursor(), 0);
        form.cursor_left(); // Already at start
        assert_eq!(form.cursor(), 0);

        form.cursor_end();
        assert_eq!(form.cursor(), 4);
        form.cursor_right(); // Already at end
        assert_eq!(form.cursor(), 4);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut form = SubscriptionForm::new();
        form.insert_char('é');
        form.insert_char('@');
        assert_eq!(form.cursor(), 3);
        form.cursor_left();
        form.cursor_left();
        assert_eq!(form.cursor(), 0);
        form.cursor_right();
        form.delete_char();
        assert_eq!(form.email(), "@");
    }

    #[test]
    fn test_invalid_submit_sets_error() {
        let mut form = form_with("not-an-email");
        let err = form.submit(Instant::now()).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(form.status(), SubscriptionStatus::Error);
        assert_eq!(form.message(), "Please enter a valid email address");
        // Input is kept so the user can fix it
        assert_eq!(form.email(), "not-an-email");
    }

    #[test]
    fn test_empty_submit_is_invalid() {
        let mut form = SubscriptionForm::new();
        assert!(form.submit(Instant::now()).is_err());
        assert_eq!(form.status(), SubscriptionStatus::Error);
    }

    #[test]
    fn test_valid_submit_moves_to_loading() {
        let mut form = form_with("a@b.co");
        let email = form.submit(Instant::now()).unwrap();
        assert_eq!(email.as_str(), "a@b.co");
        assert_eq!(form.status(), SubscriptionStatus::Loading);
        assert!(form.message().is_empty());
    }

    #[test]
    fn test_submit_while_loading_is_rejected() {
        let mut form = form_with("a@b.co");
        form.submit(Instant::now()).unwrap();
        assert_eq!(
            form.submit(Instant::now()).unwrap_err(),
            DomainError::SubmissionInFlight
        );
        assert_eq!(form.status(), SubscriptionStatus::Loading);
    }

    #[test]
    fn test_input_is_frozen_while_loading() {
        let mut form = form_with("a@b.co");
        form.submit(Instant::now()).unwrap();
        form.insert_char('x');
        form.delete_char();
        form.set_email("other@example.com");
        assert_eq!(form.email(), "a@b.co");
    }

    #[test]
    fn test_success_clears_input() {
        let mut form = form_with("user@example.com");
        let now = Instant::now();
        form.submit(now).unwrap();
        assert!(form.complete(&SubscriptionOutcome::Subscribed, now));
        assert_eq!(form.status(), SubscriptionStatus::Success);
        assert_eq!(form.message(), SUCCESS_MESSAGE);
        assert!(form.email().is_empty());
        assert_eq!(form.cursor(), 0);
    }

    #[test]
    fn test_rejection_keeps_input() {
        let mut form = form_with("user@example.com");
        let now = Instant::now();
        form.submit(now).unwrap();
        form.complete(&SubscriptionOutcome::Rejected { status: 500 }, now);
        assert_eq!(form.status(), SubscriptionStatus::Error);
        assert_eq!(form.message(), REJECTED_MESSAGE);
        assert_eq!(form.email(), "user@example.com");
    }

    #[test]
    fn test_network_failure_message() {
        let mut form = form_with("user@example.com");
        let now = Instant::now();
        form.submit(now).unwrap();
        form.complete(&SubscriptionOutcome::NetworkFailure("refused".into()), now);
        assert_eq!(form.status(), SubscriptionStatus::Error);
        assert_eq!(form.message(), NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn test_complete_without_request_is_ignored() {
        let mut form = SubscriptionForm::new();
        assert!(!form.complete(&SubscriptionOutcome::Subscribed, Instant::now()));
        assert_eq!(form.status(), SubscriptionStatus::Idle);
    }

    #[test]
    fn test_expire_after_delay() {
        let mut form = form_with("user@example.com");
        let start = Instant::now();
        form.submit(start).unwrap();
        form.complete(&SubscriptionOutcome::Subscribed, start);

        assert!(!form.expire(start + Duration::from_millis(4_999)));
        assert_eq!(form.status(), SubscriptionStatus::Success);

        assert!(form.expire(start + DEFAULT_RESET_AFTER));
        assert_eq!(form.status(), SubscriptionStatus::Idle);
        assert!(form.message().is_empty());
        assert!(form.resets_at().is_none());
    }

    #[test]
    fn test_validation_error_also_expires() {
        let mut form = form_with("bad");
        let start = Instant::now();
        let _ = form.submit(start);
        assert_eq!(form.resets_at(), Some(start + DEFAULT_RESET_AFTER));
        assert!(form.expire(start + DEFAULT_RESET_AFTER));
        assert_eq!(form.status(), SubscriptionStatus::Idle);
    }

    #[test]
    fn test_loading_never_expires() {
        let mut form = form_with("user@example.com").with_reset_after(Duration::ZERO);
        let start = Instant::now();
        let _ = form.submit(start);
        assert!(!form.expire(start + Duration::from_secs(60)));
        assert_eq!(form.status(), SubscriptionStatus::Loading);
    }

    #[test]
    fn test_resubmit_after_error_clears_pending_reset() {
        let mut form = form_with("bad");
        let start = Instant::now();
        let _ = form.submit(start);
        form.set_email("good@example.com");
        form.submit(start + Duration::from_secs(1)).unwrap();
        assert!(!form.expire(start + Duration::from_secs(10)));
        assert_eq!(form.status(), SubscriptionStatus::Loading);
    }
}
