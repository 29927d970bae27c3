//! Call API DTOs

use crate::domain::call::{CallHandle, CallRequest, CallStatusView};
use crate::domain::shared::result::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const CALL_INITIATED: &str = "Call initiated successfully";

/// Body of `POST /api/make-call`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeCallRequest {
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub voice_type: Option<String>,
    #[serde(default)]
    pub call_purpose: Option<String>,
}

impl TryFrom<MakeCallRequest> for CallRequest {
    type Error = crate::domain::shared::error::DomainError;

    fn try_from(req: MakeCallRequest) -> Result<Self> {
        CallRequest::new(req.phone_number, req.message, req.voice_type, req.call_purpose)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeCallResponse {
    pub success: bool,
    pub call_sid: String,
    pub status: String,
    pub message: String,
}

impl From<CallHandle> for MakeCallResponse {
    fn from(handle: CallHandle) -> Self {
        MakeCallResponse {
            success: true,
            call_sid: handle.call_sid,
            status: handle.initial_status,
            message: CALL_INITIATED.to_string(),
        }
    }
}

/// Query of `GET /api/call-status`
#[derive(Debug, Default, Deserialize)]
pub struct CallStatusQuery {
    #[serde(rename = "callSid", default)]
    pub call_sid: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallStatusResponse {
    pub status: String,
    pub duration: Option<u32>,
    pub direction: String,
    pub from: String,
    pub to: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl From<CallStatusView> for CallStatusResponse {
    fn from(view: CallStatusView) -> Self {
        CallStatusResponse {
            status: view.status,
            duration: view.duration_seconds,
            direction: view.direction,
            from: view.from,
            to: view.to,
            start_time: view.start_time,
            end_time: view.end_time,
        }
    }
}

/// Error body shared by every endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(rename = "needsSetup", skip_serializing_if = "Option::is_none")]
    pub needs_setup: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            needs_setup: None,
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_make_call_request_field_names() {
        let req: MakeCallRequest = serde_json::from_value(json!({
            "phoneNumber": "+15551234567",
            "message": "Hi",
            "callPurpose": "reminder"
        }))
        .unwrap();
        assert_eq!(req.phone_number.as_deref(), Some("+15551234567"));
        assert_eq!(req.voice_type, None);

        let call: CallRequest = req.try_into().unwrap();
        assert_eq!(call.call_purpose(), "reminder");
    }

    #[test]
    fn test_status_response_shape() {
        let response = CallStatusResponse::from(CallStatusView {
            status: "completed".to_string(),
            duration_seconds: Some(42),
            direction: "outbound-api".to_string(),
            from: "+15550001111".to_string(),
            to: "+15551234567".to_string(),
            start_time: None,
            end_time: None,
        });

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "status": "completed",
                "duration": 42,
                "direction": "outbound-api",
                "from": "+15550001111",
                "to": "+15551234567",
                "startTime": null,
                "endTime": null
            })
        );
    }

    #[test]
    fn test_error_response_omits_empty_fields() {
        assert_eq!(
            serde_json::to_value(ErrorResponse::new("Method not allowed")).unwrap(),
            json!({ "error": "Method not allowed" })
        );
    }
}
