//! Domain layer - Core business rules
//!
//! This layer contains:
//! - Value objects: call requests, handles and status projections
//! - Ports: the call-control provider and the call event sink
//! - The speech-response document builder

pub mod call;
pub mod shared;

// Re-export commonly used types
pub use shared::{DomainError, Result};
