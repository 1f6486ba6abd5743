//! Configuration management for the contact form.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honoured if present. The three EmailJS secrets are optional at load
//! time; their presence is checked by [`Config::credentials`] right before a send.

use crate::error::{ConfigError, ConfigResult};
use std::env;

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";
pub const API_URL_VAR: &str = "EMAILJS_API_URL";

/// Default EmailJS REST endpoint host.
pub const DEFAULT_API_URL: &str = "https://api.emailjs.com";

/// Configuration for the contact form.
#[derive(Clone)]
pub struct Config {
    /// EmailJS service identifier
    pub service_id: Option<String>,

    /// EmailJS template identifier
    pub template_id: Option<String>,

    /// EmailJS public key (sent as `user_id`)
    pub public_key: Option<String>,

    /// EmailJS API base URL (default: https://api.emailjs.com)
    pub api_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

/// The three EmailJS secrets, all known to be present.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

// All three values are secrets; none of them may reach a log line.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("service_id", &"<redacted>")
            .field("template_id", &"<redacted>")
            .field("public_key", &"<redacted>")
            .finish()
    }
}

fn redacted(secret: &Option<String>) -> Option<&'static str> {
    secret.as_ref().map(|_| "<redacted>")
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("service_id", &redacted(&self.service_id))
            .field("template_id", &redacted(&self.template_id))
            .field("public_key", &redacted(&self.public_key))
            .field("api_url", &self.api_url)
            .field("request_timeout", &self.request_timeout)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Secrets, checked at submit time:
    /// - `EMAILJS_SERVICE_ID`
    /// - `EMAILJS_TEMPLATE_ID`
    /// - `EMAILJS_PUBLIC_KEY`
    ///
    /// Optional environment variables:
    /// - `EMAILJS_API_URL`: API base URL (default: https://api.emailjs.com)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let api_url = env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: API_URL_VAR.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be at least 1 second".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            service_id: Self::secret(SERVICE_ID_VAR),
            template_id: Self::secret(TEMPLATE_ID_VAR),
            public_key: Self::secret(PUBLIC_KEY_VAR),
            api_url,
            request_timeout,
            log_level,
        })
    }

    /// Return the three secrets, or the first one that is missing.
    ///
    /// Blank values count as missing.
    pub fn credentials(&self) -> ConfigResult<Credentials> {
        Ok(Credentials {
            service_id: Self::require(&self.service_id, SERVICE_ID_VAR)?,
            template_id: Self::require(&self.template_id, TEMPLATE_ID_VAR)?,
            public_key: Self::require(&self.public_key, PUBLIC_KEY_VAR)?,
        })
    }

    fn require(value: &Option<String>, var_name: &str) -> ConfigResult<String> {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .ok_or_else(|| ConfigError::MissingVar(var_name.to_string()))
    }

    fn secret(var_name: &str) -> Option<String> {
        env::var(var_name).ok().filter(|v| !v.trim().is_empty())
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            service_id: None,
            template_id: None,
            public_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}
