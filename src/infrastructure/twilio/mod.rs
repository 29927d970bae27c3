//! Twilio REST API adapter for the call-control provider port

pub mod client;
pub mod types;

pub use client::{TwilioClient, TwilioError};
pub use types::{ApiErrorBody, CallResource};
