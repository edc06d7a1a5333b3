//! Email subscription: validation, payload and the form state machine.
//!
//! - [`email::EmailAddress`]: shape-checked email value object
//! - [`request::SubscriptionRequest`]: JSON body sent to the service
//! - [`status::SubscriptionStatus`] / [`status::SubscriptionOutcome`]: lifecycle and results
//! - [`form::SubscriptionForm`]: input buffer plus `idle → loading → success|error → idle`

pub mod email;
pub mod form;
pub mod request;
pub mod status;
