//! Validated outbound call request

use crate::domain::shared::error::DomainError;
use crate::domain::shared::result::Result;

const MISSING_FIELDS: &str = "Missing required fields";

/// A request to place an outbound call.
///
/// Only constructed through [`CallRequest::new`], so the destination number,
/// message and purpose are always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRequest {
    destination_number: String,
    message: String,
    voice_type: Option<String>,
    call_purpose: String,
}

impl CallRequest {
    pub fn new(
        destination_number: Option<String>,
        message: Option<String>,
        voice_type: Option<String>,
        call_purpose: Option<String>,
    ) -> Result<Self> {
        match (
            present(destination_number),
            present(message),
            present(call_purpose),
        ) {
            (Some(destination_number), Some(message), Some(call_purpose)) => Ok(Self {
                destination_number,
                message,
                voice_type: present(voice_type),
                call_purpose,
            }),
            _ => Err(DomainError::Validation(MISSING_FIELDS.to_string())),
        }
    }

    pub fn destination_number(&self) -> &str {
        &self.destination_number
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Advisory only; the spoken voice is fixed by the speech document
    pub fn voice_type(&self) -> Option<&str> {
        self.voice_type.as_deref()
    }

    pub fn call_purpose(&self) -> &str {
        &self.call_purpose
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
