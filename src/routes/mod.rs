//! HTTP route handlers

pub mod counter;
pub mod metrics;
pub mod status;
