//! Call value objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of a successful call initiation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallHandle {
    /// Provider-assigned call identifier
    pub call_sid: String,
    pub initial_status: String,
}

/// Provider-side call state at the instant of the query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallStatusView {
    pub status: String,
    /// `None` while the call has not finished
    pub duration_seconds: Option<u32>,
    pub direction: String,
    pub from: String,
    pub to: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

/// Status changes the provider reports back to the webhook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallbackEvent {
    Initiated,
    Ringing,
    Answered,
    Completed,
}

impl CallbackEvent {
    /// Every event an outbound call subscribes to
    pub const ALL: [CallbackEvent; 4] = [
        CallbackEvent::Initiated,
        CallbackEvent::Ringing,
        CallbackEvent::Answered,
        CallbackEvent::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CallbackEvent::Initiated => "initiated",
            CallbackEvent::Ringing => "ringing",
            CallbackEvent::Answered => "answered",
            CallbackEvent::Completed => "completed",
        }
    }
}
