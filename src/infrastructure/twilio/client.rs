//! Twilio Calls API client

use super::types::{ApiErrorBody, CallResource};
use crate::config::TwilioConfig;
use crate::domain::call::{
    CallHandle, CallProvider, CallStatusView, NewCall, ProviderFailure, ProviderResult,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

const API_VERSION: &str = "2010-04-01";

#[derive(Error, Debug)]
pub enum TwilioError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{}", api_error_text(.status, .code, .message))]
    Api {
        status: u16,
        code: Option<u32>,
        message: String,
        more_info: Option<String>,
    },

    #[error("Unexpected response body: {0}")]
    InvalidResponse(String),
}

impl TwilioError {
    /// Message as the provider phrased it, without our framing
    pub fn provider_message(&self) -> String {
        match self {
            TwilioError::Api { message, .. } => message.clone(),
            TwilioError::Http(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<TwilioError> for ProviderFailure {
    fn from(err: TwilioError) -> Self {
        ProviderFailure::new(err.provider_message(), err.to_string())
    }
}

fn api_error_text(status: &u16, code: &Option<u32>, message: &str) -> String {
    match code {
        Some(code) => format!("RestException [{}] (HTTP {}): {}", code, status, message),
        None => format!("Twilio API error (HTTP {}): {}", status, message),
    }
}

/// Client for one Twilio account
#[derive(Clone)]
pub struct TwilioClient {
    http: reqwest::Client,
    base_url: Url,
    account_sid: String,
    auth_token: String,
}

impl TwilioClient {
    pub fn new(
        base_url: &str,
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TwilioError> {
        let base_url =
            Url::parse(base_url).map_err(|e| TwilioError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(TwilioError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url,
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
        })
    }

    /// Build a client from configuration.
    ///
    /// Missing credentials are left empty; callers check
    /// [`TwilioConfig::credentials`] before using the client.
    pub fn from_config(config: &TwilioConfig) -> Result<Self, TwilioError> {
        Self::new(
            &config.api_base_url,
            config.account_sid.clone().unwrap_or_default(),
            config.auth_token.clone().unwrap_or_default(),
            config.request_timeout(),
        )
    }

    /// `{base}/2010-04-01/Accounts/{AccountSid}/{resource...}`
    fn account_url(&self, resource: &[&str]) -> Result<Url, TwilioError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TwilioError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend([API_VERSION, "Accounts", self.account_sid.as_str()])
            .extend(resource);
        Ok(url)
    }

    /// Create an outbound call
    pub async fn create(&self, call: &NewCall) -> Result<CallResource, TwilioError> {
        let url = self.account_url(&["Calls.json"])?;

        let mut form: Vec<(&str, &str)> = vec![
            ("To", call.to.as_str()),
            ("From", call.from.as_str()),
            ("Twiml", call.document.as_str()),
            ("StatusCallback", call.callback_url.as_str()),
            ("StatusCallbackMethod", "POST"),
        ];
        form.extend(
            call.callback_events
                .iter()
                .map(|event| ("StatusCallbackEvent", event.as_str())),
        );

        debug!(to = %call.to, "POST {}", url);

        let response = self
            .http
            .post(url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&form)
            .send()
            .await?;

        read_call(response).await
    }

    /// Fetch a call by SID
    pub async fn fetch(&self, call_sid: &str) -> Result<CallResource, TwilioError> {
        let url = self.account_url(&["Calls", &format!("{call_sid}.json")])?;

        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .send()
            .await?;

        read_call(response).await
    }
}

async fn read_call(response: reqwest::Response) -> Result<CallResource, TwilioError> {
    let status = response.status();
    let body = response.bytes().await?;

    if status.is_success() {
        return serde_json::from_slice(&body)
            .map_err(|e| TwilioError::InvalidResponse(e.to_string()));
    }

    Err(match serde_json::from_slice::<ApiErrorBody>(&body) {
        Ok(err) if !err.message.is_empty() => TwilioError::Api {
            status: status.as_u16(),
            code: err.code,
            message: err.message,
            more_info: err.more_info,
        },
        _ => TwilioError::Api {
            status: status.as_u16(),
            code: None,
            message: reason(status),
            more_info: None,
        },
    })
}

fn reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}

#[async_trait]
impl CallProvider for TwilioClient {
    async fn create_call(&self, call: NewCall) -> ProviderResult<CallHandle> {
        Ok(self.create(&call).await?.into_handle())
    }

    async fn fetch_call(&self, call_sid: &str) -> ProviderResult<CallStatusView> {
        Ok(self.fetch(call_sid).await?.into_status_view())
    }
}
