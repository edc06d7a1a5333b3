//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`SubscriptionConfig`]: endpoint, payload metadata and timers for subscribing
//! - [`QuoteConfig`]: quote transition timing

pub mod quote_config;
pub mod subscription_config;

pub use quote_config::QuoteConfig;
pub use subscription_config::SubscriptionConfig;
