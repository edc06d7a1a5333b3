//! Progress reporting for subscription attempts

pub mod reporter;
