//! Application layer for epic-quotes
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{QuoteConfig, SubscriptionConfig, subscription_config::DEFAULT_ENDPOINT};
pub use ports::{
    progress::{NoProgress, SubscriptionProgress},
    subscription_gateway::{SubscribeError, SubscriptionGateway},
};
pub use use_cases::generate_quote::GenerateQuoteUseCase;
pub use use_cases::subscribe::SubscribeUseCase;
