//! HTTP client for the EmailJS delivery API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking` (see [`AsyncEmailJsClient`]). Calls from outside a
//! browser require "API access from non-browser environments" to be enabled in the
//! EmailJS account settings.

mod async_wrapper;
pub use async_wrapper::{AsyncEmailJsClient, AsyncEmailSender};

use crate::config::{Config, Credentials};
use crate::domain::ContactMessage;
use crate::error::{DeliveryError, DeliveryResult};
use crate::metrics::DeliveryMetrics;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Path of the send endpoint, relative to the API base URL.
pub const SEND_PATH: &str = "/api/v1.0/email/send";

/// Values substituted into the EmailJS template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub to_name: String,
    pub to_email: String,
    pub message: String,
}

impl From<&ContactMessage> for TemplateParams {
    fn from(msg: &ContactMessage) -> Self {
        Self {
            to_name: msg.name().to_string(),
            to_email: msg.email().to_string(),
            message: msg.message().to_string(),
        }
    }
}

/// JSON body of a send request.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// HTTP client for the EmailJS API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct EmailJsClient {
    /// Base URL for the EmailJS API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Outcome counters
    metrics: DeliveryMetrics,
}

impl EmailJsClient {
    /// Create a new EmailJsClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(
            config.api_url.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    /// Create an EmailJsClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self::build(base_url, Duration::from_secs(10))
    }

    fn build(base_url: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: DeliveryMetrics::new(),
        }
    }

    /// Counters for every send made through this client.
    pub fn metrics(&self) -> &DeliveryMetrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Relay one message through the given EmailJS service and template.
    ///
    /// Any 2xx answer counts as delivered; the body (normally `OK`) is ignored.
    pub fn send(&self, credentials: &Credentials, params: &TemplateParams) -> DeliveryResult<()> {
        let url = self.build_url(SEND_PATH);
        let body = serde_json::to_value(SendRequest {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: params,
        })?;

        tracing::debug!("POST {}", url);

        let start = Instant::now();
        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map(|response| {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
            })
            .map_err(|e| self.map_error(e));

        if let Err(e) = &result {
            tracing::warn!("POST {} - Error: {}", url, e);
        }
        self.metrics.record(&result, start.elapsed());
        result
    }

    /// Map a ureq error to a DeliveryError.
    fn map_error(&self, error: ureq::Error) -> DeliveryError {
        match error {
            ureq::Error::Status(status, response) => {
                let text = response.into_string().unwrap_or_default();
                DeliveryError::Rejected { status, text }
            }
            ureq::Error::Transport(transport) => match transport.kind() {
                ureq::ErrorKind::ConnectionFailed => {
                    DeliveryError::Transport("Connection failed".to_string())
                }
                ureq::ErrorKind::Io => DeliveryError::Timeout,
                _ => DeliveryError::Transport(transport.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{validate, ContactForm};

    #[test]
    fn test_build_url() {
        let client = EmailJsClient::with_base_url("https://api.emailjs.com/".to_string());
        assert_eq!(
            client.build_url(SEND_PATH),
            "https://api.emailjs.com/api/v1.0/email/send"
        );
    }

    #[test]
    fn test_template_params_from_message() {
        let form = ContactForm::with_values("Alice", "a@b.com", "Hello there!");
        let msg = validate(&form).unwrap();
        let params = TemplateParams::from(&msg);

        assert_eq!(params.to_name, "Alice");
        assert_eq!(params.to_email, "a@b.com");
        assert_eq!(params.message, "Hello there!");
    }

    #[test]
    fn test_send_request_shape() {
        let params = TemplateParams {
            to_name: "Alice".to_string(),
            to_email: "a@b.com".to_string(),
            message: "Hello there!".to_string(),
        };
        let body = serde_json::to_value(SendRequest {
            service_id: "service_abc",
            template_id: "template_xyz",
            user_id: "pk_123",
            template_params: &params,
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk_123",
                "template_params": {
                    "to_name": "Alice",
                    "to_email": "a@b.com",
                    "message": "Hello there!"
                }
            })
        );
    }

    #[test]
    fn test_client_from_config() {
        let config = Config {
            api_url: "http://localhost:9".to_string(),
            ..Config::default()
        };
        let client = EmailJsClient::new(&config);
        assert_eq!(client.metrics().snapshot().attempts(), 0);
    }
}
