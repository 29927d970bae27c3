//! Twilio REST API wire types

use crate::domain::call::{CallHandle, CallStatusView};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Subset of the Call resource this service reads
#[derive(Debug, Clone, Deserialize)]
pub struct CallResource {
    pub sid: String,
    pub status: String,
    /// Seconds, sent as a string; null until the call ends
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    /// RFC 2822, e.g. `Tue, 31 Aug 2010 20:36:28 +0000`
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

impl CallResource {
    pub fn into_handle(self) -> CallHandle {
        CallHandle {
            call_sid: self.sid,
            initial_status: self.status,
        }
    }

    pub fn into_status_view(self) -> CallStatusView {
        CallStatusView {
            status: self.status,
            duration_seconds: self.duration.as_deref().and_then(|d| d.parse().ok()),
            direction: self.direction.unwrap_or_default(),
            from: self.from.unwrap_or_default(),
            to: self.to.unwrap_or_default(),
            start_time: self.start_time.as_deref().and_then(parse_timestamp),
            end_time: self.end_time.as_deref().and_then(parse_timestamp),
        }
    }
}

/// Error body returned with 4xx/5xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u32>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub more_info: Option<String>,
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_completed_call_to_status_view() {
        let resource: CallResource = serde_json::from_str(
            r#"{
                "sid": "CA42",
                "status": "completed",
                "duration": "42",
                "direction": "outbound-api",
                "from": "+15550001111",
                "to": "+15551234567",
                "start_time": "Tue, 31 Aug 2010 20:36:28 +0000",
                "end_time": "Tue, 31 Aug 2010 20:37:10 +0000",
                "price": "-0.03000"
            }"#,
        )
        .unwrap();

        let view = resource.into_status_view();
        assert_eq!(view.status, "completed");
        assert_eq!(view.duration_seconds, Some(42));
        assert_eq!(view.direction, "outbound-api");
        assert_eq!(
            view.start_time,
            Some(Utc.with_ymd_and_hms(2010, 8, 31, 20, 36, 28).unwrap())
        );
        assert_eq!(
            view.end_time,
            Some(Utc.with_ymd_and_hms(2010, 8, 31, 20, 37, 10).unwrap())
        );
    }

    #[test]
    fn test_queued_call_has_no_duration_or_times() {
        let resource: CallResource = serde_json::from_str(
            r#"{"sid": "CA1", "status": "queued", "duration": null, "start_time": null}"#,
        )
        .unwrap();

        let view = resource.into_status_view();
        assert_eq!(view.duration_seconds, None);
        assert_eq!(view.start_time, None);
        assert_eq!(view.end_time, None);
        assert_eq!(view.from, "");
    }
}
