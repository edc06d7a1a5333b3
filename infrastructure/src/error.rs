//! Infrastructure error types

use thiserror::Error;

/// Errors raised while building adapters
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Invalid subscription endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, InfraError>;
