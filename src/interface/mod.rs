//! Interface layer - External interfaces
//!
//! This layer handles:
//! - REST API endpoints for placing and inspecting calls
//! - The provider's status callback webhook
//! - Request/response formatting

pub mod api;
