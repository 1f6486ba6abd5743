//! Message submission.
//!
//! The submitter checks that the EmailJS secrets are configured and then
//! performs exactly one delivery attempt. It never retries and never touches
//! form state; reporting and reset belong to the controller.

use crate::client::{AsyncEmailSender, TemplateParams};
use crate::config::Config;
use crate::domain::ContactMessage;
use crate::error::ContactResult;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct Submitter {
    config: Config,
    sender: Arc<dyn AsyncEmailSender>,
}

impl Submitter {
    pub fn new(config: Config, sender: Arc<dyn AsyncEmailSender>) -> Self {
        Self { config, sender }
    }

    /// Send a validated message.
    ///
    /// # Errors
    ///
    /// `ContactError::Config` when a secret is missing (no request is made),
    /// `ContactError::Delivery` when the request fails or is rejected.
    pub async fn submit(&self, message: &ContactMessage) -> ContactResult<()> {
        let credentials = self.config.credentials().map_err(|e| {
            warn!("Submission aborted: {}", e);
            e
        })?;
        debug!("EmailJS configuration present");

        let params = TemplateParams::from(message);
        self.sender.send(&credentials, &params).await.map_err(|e| {
            warn!("Delivery failed: {}", e);
            e
        })?;

        info!("Contact message from {} delivered", message.address().domain());
        Ok(())
    }
}
