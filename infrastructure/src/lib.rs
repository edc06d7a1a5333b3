//! Infrastructure layer for epic-quotes
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod error;
pub mod subscribe;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileOutputConfig, FileQuoteConfig, FileSubscriptionConfig,
    FileTuiConfig,
};
pub use error::{InfraError, Result};
pub use subscribe::HttpSubscriptionGateway;
