//! Progress notification port
//!
//! Defines the interface for reporting subscription progress.

use epic_quotes_domain::SubscriptionStatus;

/// Callback for status changes during a subscription attempt
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, TUI status line, etc.)
pub trait SubscriptionProgress: Send + Sync {
    /// Called every time the form changes status
    fn on_status_change(&self, status: SubscriptionStatus, message: &str);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SubscriptionProgress for NoProgress {
    fn on_status_change(&self, _status: SubscriptionStatus, _message: &str) {}
}
