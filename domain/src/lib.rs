//! Domain layer for epic-quotes
//!
//! This crate contains the core entities, value objects and state machines.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quotes
//!
//! A fixed catalog of [`Quote`]s is embedded at build time. [`QuoteDeck`]
//! tracks the one on screen and fades to a uniformly random pick on request.
//!
//! ## Subscription
//!
//! [`SubscriptionForm`] holds the email buffer and walks
//! `idle → loading → success|error → idle`, auto-resetting after a delay.

pub mod config;
pub mod core;
pub mod quote;
pub mod subscription;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use crate::core::error::DomainError;
pub use quote::{
    catalog::{EPIC_QUOTES, QuoteCatalog},
    entities::Quote,
    selector::{DEFAULT_TRANSITION, QuoteDeck, select_index, select_quote},
};
pub use subscription::{
    email::EmailAddress,
    form::{DEFAULT_RESET_AFTER, SubscriptionForm},
    request::{DEFAULT_LIST, DEFAULT_SOURCE, SubscriptionRequest},
    status::{
        INVALID_EMAIL_MESSAGE, NETWORK_ERROR_MESSAGE, REJECTED_MESSAGE, SUCCESS_MESSAGE,
        SubscriptionOutcome, SubscriptionStatus,
    },
};
