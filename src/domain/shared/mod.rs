//! Shared kernel - Common types used across the call context

pub mod error;
pub mod result;

pub use error::DomainError;
pub use result::Result;
