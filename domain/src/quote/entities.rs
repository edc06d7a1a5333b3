//! Quote entity

use serde::Serialize;

/// An inspirational quote (Entity)
///
/// Quotes are defined at compile time and never change at runtime.
/// Every field is a non-empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Quote {
    /// The quote itself, without surrounding quotation marks
    pub text: &'static str,
    /// Who said it
    pub author: &'static str,
    /// Short category label (e.g. "Inspiration")
    pub category: &'static str,
}

impl Quote {
    pub const fn new(text: &'static str, author: &'static str, category: &'static str) -> Self {
        Self {
            text,
            author,
            category,
        }
    }

    /// Returns true if every field carries visible text
    pub fn is_complete(&self) -> bool {
        !self.text.trim().is_empty()
            && !self.author.trim().is_empty()
            && !self.category.trim().is_empty()
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" — {} [{}]", self.text, self.author, self.category)
    }
}
