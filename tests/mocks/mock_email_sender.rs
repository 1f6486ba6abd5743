use async_trait::async_trait;
use portfolio_contact::config::Credentials;
use portfolio_contact::error::{DeliveryError, DeliveryResult};
use portfolio_contact::{AsyncEmailSender, TemplateParams};
use std::sync::{Arc, Mutex};

/// How the mock answers every send.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum MockResponse {
    Accept,
    Reject { status: u16, text: String },
    ConnectionFailed,
    /// Never answers.
    Hang,
}

/// Mock delivery API that records every send it receives.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockEmailSender {
    response: Arc<Mutex<MockResponse>>,
    sent: Arc<Mutex<Vec<(Credentials, TemplateParams)>>>,
}

#[allow(dead_code)]
impl MockEmailSender {
    pub fn new() -> Self {
        Self::with_response(MockResponse::Accept)
    }

    pub fn with_response(response: MockResponse) -> Self {
        Self {
            response: Arc::new(Mutex::new(response)),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_response(&self, response: MockResponse) {
        *self.response.lock().unwrap() = response;
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn sent(&self) -> Vec<TemplateParams> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(_, params)| params.clone())
            .collect()
    }

    pub fn last_credentials(&self) -> Option<Credentials> {
        self.sent
            .lock()
            .unwrap()
            .last()
            .map(|(creds, _)| creds.clone())
    }
}

impl Default for MockEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AsyncEmailSender for MockEmailSender {
    async fn send(
        &self,
        credentials: &Credentials,
        params: &TemplateParams,
    ) -> DeliveryResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push((credentials.clone(), params.clone()));

        let response = self.response.lock().unwrap().clone();
        match response {
            MockResponse::Accept => Ok(()),
            MockResponse::Reject { status, text } => Err(DeliveryError::Rejected { status, text }),
            MockResponse::ConnectionFailed => {
                Err(DeliveryError::Transport("Connection failed".to_string()))
            }
            MockResponse::Hang => std::future::pending().await,
        }
    }
}
