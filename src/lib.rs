//! Voice Agent - places outbound text-to-speech calls through Twilio
//!
//! A thin layered service: validated requests flow from the HTTP interface
//! through the call service to a call-control provider port, with status
//! callbacks from the provider recorded through an event sink.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interface;

// Re-export commonly used types
pub use domain::shared::error::DomainError;
pub use domain::shared::result::Result;
