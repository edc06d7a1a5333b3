//! Email address value object

use crate::core::error::DomainError;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Basic email shape: `local@domain.suffix`, no whitespace, exactly one `@`
/// before the dot-separated domain.
///
/// Deliberately loose; addresses with comments or quoted local parts are
/// rejected and some invalid ones pass.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex literal is valid")
});

/// A syntactically plausible email address (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate `input` against the email shape. The input is not trimmed.
    pub fn parse(input: impl Into<String>) -> Result<Self, DomainError> {
        let input = input.into();
        if Self::is_valid(&input) {
            Ok(Self(input))
        } else {
            Err(DomainError::InvalidEmail(input))
        }
    }

    /// Check the shape without allocating
    pub fn is_valid(input: &str) -> bool {
        !input.is_empty() && EMAIL_SHAPE.is_match(input)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for EmailAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
