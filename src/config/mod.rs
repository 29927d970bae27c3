//! Configuration management
//!
//! Configuration is assembled once at process start from, in increasing
//! priority: built-in defaults, an optional config file, `VOICE_AGENT__*`
//! environment variables, and the conventional `TWILIO_*` variables.

use crate::domain::shared::error::DomainError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable naming the config file (without extension)
pub const CONFIG_PATH_ENV: &str = "VOICE_AGENT_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "voice-agent";
const ENV_PREFIX: &str = "VOICE_AGENT";

const MISSING_CREDENTIALS: &str = "Twilio credentials not configured. Please set TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN, and TWILIO_PHONE_NUMBER environment variables.";
const MISSING_API_CREDENTIALS: &str = "Twilio credentials not configured";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub twilio: TwilioConfig,
    /// Externally reachable base URL, used to build the status callback address
    #[serde(default)]
    pub public_base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct TwilioConfig {
    #[serde(default)]
    pub account_sid: Option<String>,
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Originating number for outbound calls
    #[serde(default)]
    pub phone_number: Option<String>,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

/// Account credentials plus originating number, all present and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

/// Credentials sufficient for read-only API calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub account_sid: String,
    pub auth_token: String,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .or_else(|_| std::env::var("NEXT_PUBLIC_BASE_URL"))
            .ok();

        let defaults = Self::default();

        config::Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("twilio.api_base_url", defaults.twilio.api_base_url)?
            .set_default(
                "twilio.request_timeout_secs",
                defaults.twilio.request_timeout_secs as i64,
            )?
            .set_default("public_base_url", defaults.public_base_url)?
            .add_source(config::File::with_name(&path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("twilio.account_sid", std::env::var("TWILIO_ACCOUNT_SID").ok())?
            .set_override_option("twilio.auth_token", std::env::var("TWILIO_AUTH_TOKEN").ok())?
            .set_override_option(
                "twilio.phone_number",
                std::env::var("TWILIO_PHONE_NUMBER").ok(),
            )?
            .set_override_option("public_base_url", public_base_url)?
            .build()?
            .try_deserialize()
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            twilio: TwilioConfig::default(),
            public_base_url: String::new(),
        }
    }
}

impl TwilioConfig {
    /// Credentials required to place a call.
    ///
    /// Empty strings count as unset.
    pub fn credentials(&self) -> Result<Credentials, DomainError> {
        match (
            non_empty(&self.account_sid),
            non_empty(&self.auth_token),
            non_empty(&self.phone_number),
        ) {
            (Some(account_sid), Some(auth_token), Some(from_number)) => Ok(Credentials {
                account_sid: account_sid.to_string(),
                auth_token: auth_token.to_string(),
                from_number: from_number.to_string(),
            }),
            _ => Err(DomainError::Configuration(MISSING_CREDENTIALS.to_string())),
        }
    }

    /// Credentials required to query the API; the originating number is not needed
    pub fn api_credentials(&self) -> Result<ApiCredentials, DomainError> {
        match (non_empty(&self.account_sid), non_empty(&self.auth_token)) {
            (Some(account_sid), Some(auth_token)) => Ok(ApiCredentials {
                account_sid: account_sid.to_string(),
                auth_token: auth_token.to_string(),
            }),
            _ => Err(DomainError::Configuration(
                MISSING_API_CREDENTIALS.to_string(),
            )),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for TwilioConfig {
    fn default() -> Self {
        Self {
            account_sid: None,
            auth_token: None,
            phone_number: None,
            api_base_url: "https://api.twilio.com".to_string(),
            request_timeout_secs: 30,
        }
    }
}

// Keeps the auth token out of logs.
impl std::fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "***"))
            .field("phone_number", &self.phone_number)
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> TwilioConfig {
        TwilioConfig {
            account_sid: Some("AC123".to_string()),
            auth_token: Some("secret".to_string()),
            phone_number: Some("+15550001111".to_string()),
            ..TwilioConfig::default()
        }
    }

    #[test]
    fn test_credentials_present() {
        let creds = configured().credentials().unwrap();
        assert_eq!(creds.account_sid, "AC123");
        assert_eq!(creds.auth_token, "secret");
        assert_eq!(creds.from_number, "+15550001111");
    }

    #[test]
    fn test_credentials_missing_phone_number() {
        let config = TwilioConfig {
            phone_number: None,
            ..configured()
        };
        assert!(matches!(
            config.credentials(),
            Err(DomainError::Configuration(_))
        ));
        // Reads do not need the originating number
        assert!(config.api_credentials().is_ok());
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let config = TwilioConfig {
            auth_token: Some(String::new()),
            ..configured()
        };
        assert!(config.credentials().is_err());
        assert!(config.api_credentials().is_err());
    }

    #[test]
    fn test_debug_hides_auth_token() {
        let rendered = format!("{:?}", configured());
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("AC123"));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.twilio.api_base_url, "https://api.twilio.com");
        assert_eq!(config.twilio.request_timeout(), Duration::from_secs(30));
        assert!(config.twilio.credentials().is_err());
    }
}
