//! Call status notifications pushed by the provider

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// A status-change notification.
///
/// Payloads are never validated, so every field is optional and the raw
/// body is kept alongside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CallEvent {
    pub call_sid: Option<String>,
    pub status: Option<String>,
    pub duration_seconds: Option<u32>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub raw: String,
}

impl CallEvent {
    /// Parse a webhook body, form-encoded or JSON.
    ///
    /// Never fails: anything unrecognised just leaves fields empty.
    pub fn from_payload(content_type: Option<&str>, body: &[u8]) -> Self {
        let raw = String::from_utf8_lossy(body).into_owned();

        let is_json = content_type
            .map(|ct| ct.starts_with("application/json"))
            .unwrap_or(false)
            || raw.trim_start().starts_with('{');

        let mut event = if is_json {
            Self::from_json(body)
        } else {
            Self::from_form(body)
        };
        event.raw = raw;
        event
    }

    fn from_form(body: &[u8]) -> Self {
        let mut event = Self::default();
        for (key, value) in url::form_urlencoded::parse(body) {
            let value = value.into_owned();
            match key.as_ref() {
                "CallSid" => event.call_sid = Some(value),
                "CallStatus" => event.status = Some(value),
                "CallDuration" => event.duration_seconds = value.parse().ok(),
                "From" => event.from = Some(value),
                "To" => event.to = Some(value),
                _ => {}
            }
        }
        event
    }

    fn from_json(body: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(_) => return Self::default(),
        };

        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);

        let duration_seconds = match value.get("CallDuration") {
            Some(Value::Number(n)) => n.as_u64().and_then(|d| u32::try_from(d).ok()),
            Some(Value::String(s)) => s.parse().ok(),
            _ => None,
        };

        Self {
            call_sid: text("CallSid"),
            status: text("CallStatus"),
            duration_seconds,
            from: text("From"),
            to: text("To"),
            raw: String::new(),
        }
    }
}

/// Destination for received call events
#[async_trait]
pub trait CallEventSink: Send + Sync {
    async fn record(&self, event: &CallEvent) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_payload() {
        let body = b"CallSid=CA123&CallStatus=completed&CallDuration=42&From=%2B15550001111&To=%2B15551234567&ApiVersion=2010-04-01";
        let event = CallEvent::from_payload(Some("application/x-www-form-urlencoded"), body);

        assert_eq!(event.call_sid.as_deref(), Some("CA123"));
        assert_eq!(event.status.as_deref(), Some("completed"));
        assert_eq!(event.duration_seconds, Some(42));
        assert_eq!(event.from.as_deref(), Some("+15550001111"));
        assert_eq!(event.to.as_deref(), Some("+15551234567"));
        assert_eq!(event.raw, String::from_utf8_lossy(body));
    }

    #[test]
    fn test_parse_json_payload() {
        let body = br#"{"CallSid":"CA999","CallStatus":"ringing","CallDuration":7}"#;
        let event = CallEvent::from_payload(Some("application/json"), body);

        assert_eq!(event.call_sid.as_deref(), Some("CA999"));
        assert_eq!(event.status.as_deref(), Some("ringing"));
        assert_eq!(event.duration_seconds, Some(7));
        assert_eq!(event.from, None);
    }

    #[test]
    fn test_json_detected_without_content_type() {
        let event = CallEvent::from_payload(None, br#"  {"CallSid":"CA1"}"#);
        assert_eq!(event.call_sid.as_deref(), Some("CA1"));
    }

    #[test]
    fn test_malformed_payloads_are_kept_raw() {
        let event = CallEvent::from_payload(Some("application/json"), b"{not json");
        assert_eq!(event.call_sid, None);
        assert_eq!(event.raw, "{not json");

        let event = CallEvent::from_payload(None, b"");
        assert_eq!(event, CallEvent::default());

        let event = CallEvent::from_payload(None, b"CallDuration=soon");
        assert_eq!(event.duration_seconds, None);
    }
}
