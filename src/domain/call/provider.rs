//! Call-control provider port
//!
//! Defined in the domain layer as a trait (port) and implemented in the
//! infrastructure layer (adapter), so operations can run against a stand-in.

use crate::domain::call::value_object::{CallHandle, CallStatusView, CallbackEvent};
use async_trait::async_trait;
use thiserror::Error;

/// Command to create an outbound call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCall {
    pub to: String,
    pub from: String,
    /// Speech-response document, already rendered
    pub document: String,
    pub callback_url: String,
    pub callback_events: Vec<CallbackEvent>,
}

/// Failure reported by a provider, whatever its cause
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{rendered}")]
pub struct ProviderFailure {
    /// Provider-supplied message, possibly empty
    pub message: String,
    /// Full rendering of the underlying error
    pub rendered: String,
}

impl ProviderFailure {
    pub fn new(message: impl Into<String>, rendered: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            rendered: rendered.into(),
        }
    }
}

pub type ProviderResult<T> = std::result::Result<T, ProviderFailure>;

#[async_trait]
pub trait CallProvider: Send + Sync {
    /// Place a call; the returned handle carries the provider's status
    async fn create_call(&self, call: NewCall) -> ProviderResult<CallHandle>;

    /// Fetch the current state of a call
    async fn fetch_call(&self, call_sid: &str) -> ProviderResult<CallStatusView>;
}
