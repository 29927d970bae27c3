//! Call event logging to the tracing subscriber

use crate::domain::call::{CallEvent, CallEventSink};
use async_trait::async_trait;
use tracing::info;

/// Writes every received call event as a structured log record
#[derive(Debug, Clone)]
pub struct CallEventLogger {
    include_raw: bool,
}

impl CallEventLogger {
    pub fn new() -> Self {
        Self { include_raw: true }
    }

    /// Omit the raw payload from log records
    pub fn without_raw_payload(mut self) -> Self {
        self.include_raw = false;
        self
    }
}

impl Default for CallEventLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CallEventSink for CallEventLogger {
    async fn record(&self, event: &CallEvent) -> anyhow::Result<()> {
        let raw = if self.include_raw { event.raw.as_str() } else { "" };

        info!(
            call_sid = event.call_sid.as_deref().unwrap_or(""),
            status = event.status.as_deref().unwrap_or(""),
            duration = ?event.duration_seconds,
            from = event.from.as_deref().unwrap_or(""),
            to = event.to.as_deref().unwrap_or(""),
            raw,
            "Call webhook received"
        );

        Ok(())
    }
}
