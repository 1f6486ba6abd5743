//! Async wrapper around synchronous EmailJsClient.
//!
//! This module provides an async interface to the synchronous EmailJsClient by using
//! `tokio::task::spawn_blocking` to run the HTTP call on a dedicated thread pool,
//! preventing blocking of the event loop while a message is in flight.

use crate::client::{EmailJsClient, TemplateParams};
use crate::config::Credentials;
use crate::error::{DeliveryError, DeliveryResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Async seam for sending one contact message.
///
/// The submitter only talks to this trait, so tests can count and script
/// delivery attempts without a network.
#[async_trait]
pub trait AsyncEmailSender: Send + Sync {
    async fn send(&self, credentials: &Credentials, params: &TemplateParams)
        -> DeliveryResult<()>;
}

/// Async wrapper around synchronous EmailJsClient.
#[derive(Clone)]
pub struct AsyncEmailJsClient {
    client: Arc<EmailJsClient>,
}

impl AsyncEmailJsClient {
    pub fn new(client: EmailJsClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncEmailSender for AsyncEmailJsClient {
    async fn send(
        &self,
        credentials: &Credentials,
        params: &TemplateParams,
    ) -> DeliveryResult<()> {
        let client = self.client.clone();
        let credentials = credentials.clone();
        let params = params.clone();

        tokio::task::spawn_blocking(move || client.send(&credentials, &params))
            .await
            .map_err(|e| DeliveryError::Join(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[tokio::test]
    async fn test_async_client_creation() {
        let config = Config {
            api_url: "https://api.test.com".to_string(),
            ..Config::default()
        };
        let client = EmailJsClient::new(&config);
        let metrics = client.metrics().clone();
        let async_client = AsyncEmailJsClient::new(client);

        // Should be able to clone
        let _cloned = async_client.clone();
        assert_eq!(metrics.snapshot().attempts(), 0);
    }
}
