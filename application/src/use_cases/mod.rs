//! Use cases
//!
//! - [`generate_quote`]: random quote selection and the display fade
//! - [`subscribe`]: one email subscription attempt

pub mod generate_quote;
pub mod subscribe;
