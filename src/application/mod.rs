//! Application layer - Use cases
//!
//! Orchestrates validated domain values, configuration and the provider port.

pub mod call_service;

pub use call_service::{CallService, CALL_WEBHOOK_PATH};
