//! email-generator-service: drafts email replies for the Gmail extension.
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
