//! Provider status callback handler

use super::calls_handler::AppState;
use crate::domain::call::CallEvent;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap, StatusCode},
};
use tracing::{debug, warn};

/// Largest webhook body that is parsed; larger ones are acknowledged unread
pub const WEBHOOK_BODY_LIMIT: usize = 64 * 1024;

/// Receive a call status notification.
///
/// Always acknowledges: a non-2xx reply makes the provider retry.
pub async fn call_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> (StatusCode, &'static str) {
    let body = body.unwrap_or_else(|rejection| {
        warn!("API: Unreadable call webhook body: {}", rejection.body_text());
        Bytes::new()
    });

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let event = CallEvent::from_payload(content_type, &body);
    debug!(call_sid = ?event.call_sid, "API: Call webhook");

    state.calls.record_event(event).await;

    (StatusCode::OK, "OK")
}
