//! Infrastructure layer - Technical implementations
//!
//! This layer contains:
//! - The Twilio REST adapter for the call-control provider port
//! - The log-backed call event sink

pub mod audit;
pub mod twilio;
