//! TUI event types
//!
//! Defines the commands sent TO the subscription task and the events
//! coming back FROM it.

use epic_quotes_domain::{EmailAddress, SubscriptionOutcome};

/// Commands sent from the TUI event loop to the subscription task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiCommand {
    /// Send one subscription request for an already-validated address
    Subscribe(EmailAddress),
}

/// Events emitted by the subscription task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// The in-flight request ended
    SubscriptionFinished(SubscriptionOutcome),
}
