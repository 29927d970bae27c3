//! Outbound call use cases: initiate, read status, record provider events

use crate::config::{Config, TwilioConfig};
use crate::domain::call::{
    CallEvent, CallEventSink, CallHandle, CallProvider, CallRequest, CallStatusView,
    CallbackEvent, NewCall, SpeechDocument,
};
use crate::domain::shared::error::DomainError;
use crate::domain::shared::result::Result;
use metrics::counter;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Route the provider posts status callbacks to
pub const CALL_WEBHOOK_PATH: &str = "/api/call-webhook";

const MISSING_CALL_SID: &str = "Missing call SID";
const CREATE_FAILED: &str = "Failed to make call";
const FETCH_FAILED: &str = "Failed to fetch call status";

/// Stateless call operations; safe to share across requests
pub struct CallService {
    twilio: TwilioConfig,
    callback_url: String,
    provider: Arc<dyn CallProvider>,
    event_sink: Arc<dyn CallEventSink>,
}

impl CallService {
    pub fn new(
        config: &Config,
        provider: Arc<dyn CallProvider>,
        event_sink: Arc<dyn CallEventSink>,
    ) -> Self {
        if config.public_base_url.is_empty() {
            warn!("public_base_url is not set; status callbacks will use a relative URL");
        }

        Self {
            twilio: config.twilio.clone(),
            callback_url: callback_url(&config.public_base_url),
            provider,
            event_sink,
        }
    }

    /// Whether calls can be placed with the loaded configuration
    pub fn is_configured(&self) -> bool {
        self.twilio.credentials().is_ok()
    }

    /// Place an outbound call that speaks the request's message.
    ///
    /// Not idempotent: every invocation rings the destination again.
    pub async fn initiate(&self, request: CallRequest) -> Result<CallHandle> {
        let credentials = self.twilio.credentials().map_err(|e| {
            counter!("calls_failed_total", "reason" => "configuration").increment(1);
            e
        })?;

        info!(
            to = %request.destination_number(),
            purpose = %request.call_purpose(),
            voice_type = ?request.voice_type(),
            "Placing outbound call"
        );

        let call = NewCall {
            to: request.destination_number().to_string(),
            from: credentials.from_number,
            document: SpeechDocument::new(request.message()).render(),
            callback_url: self.callback_url.clone(),
            callback_events: CallbackEvent::ALL.to_vec(),
        };

        match self.provider.create_call(call).await {
            Ok(handle) => {
                counter!("calls_initiated_total").increment(1);
                info!(
                    call_sid = %handle.call_sid,
                    status = %handle.initial_status,
                    "Call initiated"
                );
                Ok(handle)
            }
            Err(failure) => {
                counter!("calls_failed_total", "reason" => "provider").increment(1);
                error!("Error making call: {}", failure);
                Err(DomainError::Provider {
                    message: or_fallback(failure.message, CREATE_FAILED),
                    details: Some(failure.rendered),
                })
            }
        }
    }

    /// Fetch the provider's current view of a call; never cached
    pub async fn status(&self, call_sid: &str) -> Result<CallStatusView> {
        if call_sid.is_empty() {
            return Err(DomainError::Validation(MISSING_CALL_SID.to_string()));
        }
        self.twilio.api_credentials()?;

        counter!("call_status_queries_total").increment(1);
        debug!(call_sid, "Fetching call status");

        self.provider.fetch_call(call_sid).await.map_err(|failure| {
            error!("Error fetching call status: {}", failure);
            DomainError::Provider {
                message: or_fallback(failure.message, FETCH_FAILED),
                details: None,
            }
        })
    }

    /// Hand a provider notification to the event sink.
    ///
    /// Always succeeds; sink failures are only logged.
    pub async fn record_event(&self, event: CallEvent) {
        count_event(event.status.as_deref());

        if let Err(e) = self.event_sink.record(&event).await {
            warn!(call_sid = ?event.call_sid, "Failed to record call event: {:#}", e);
        }
    }
}

/// Statuses the provider reports for a call
const KNOWN_STATUSES: [&str; 10] = [
    "queued",
    "initiated",
    "ringing",
    "in-progress",
    "answered",
    "completed",
    "busy",
    "failed",
    "no-answer",
    "canceled",
];

/// Metric label for a webhook status; payloads are unauthenticated, so the
/// label set stays fixed.
fn status_label(status: Option<&str>) -> &'static str {
    match status {
        None => "unknown",
        Some(status) => KNOWN_STATUSES
            .iter()
            .copied()
            .find(|known| *known == status)
            .unwrap_or("other"),
    }
}

fn count_event(status: Option<&str>) {
    counter!("call_events_received_total", "status" => status_label(status)).increment(1);
}

fn callback_url(public_base_url: &str) -> String {
    format!(
        "{}{}",
        public_base_url.trim_end_matches('/'),
        CALL_WEBHOOK_PATH
    )
}

fn or_fallback(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
