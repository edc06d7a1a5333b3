//! Quotes: the entity, the built-in catalog, and random selection.
//!
//! - [`entities::Quote`]: immutable `{ text, author, category }` record
//! - [`catalog::QuoteCatalog`]: the fixed, non-empty quote list
//! - [`selector::QuoteDeck`]: the on-screen quote and its fade transition

pub mod catalog;
pub mod entities;
pub mod selector;
