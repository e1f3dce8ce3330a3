//! HTTP handlers for email-generator-service.

pub mod email;
pub mod health;

pub use email::generate_email;
pub use health::{health_check, metrics_endpoint, readiness_check};
