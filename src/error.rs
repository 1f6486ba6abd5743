//! Error types for the contact form.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every error is terminal at the UI boundary: it is turned into exactly one
//! transient notification and never propagated further.

use crate::domain::ValidationError;
use thiserror::Error;

/// Notification text used when the delivery API gives no usable error text.
pub const DELIVERY_FALLBACK_TEXT: &str = "Something went wrong with EmailJS!";

/// Notification text used when a required secret is missing.
pub const CONFIG_ERROR_TEXT: &str =
    "Missing EmailJS configuration. Please check environment variables.";

/// Errors that can occur when talking to the email-delivery API.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// API answered with a non-success status
    #[error("API rejected the message (status {status}): {text}")]
    Rejected { status: u16, text: String },

    /// Network-level failure before a response was received
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Failed to serialize the request payload
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The blocking send task could not be joined
    #[error("Delivery task failed: {0}")]
    Join(String),
}

impl DeliveryError {
    /// Error text provided by the API, if the API sent any.
    pub fn api_text(&self) -> Option<&str> {
        match self {
            Self::Rejected { text, .. } if !text.trim().is_empty() => Some(text.trim()),
            _ => None,
        }
    }

    /// Text to show the user: the API's own text when present, else the fallback.
    pub fn notification_text(&self) -> &str {
        self.api_text().unwrap_or(DELIVERY_FALLBACK_TEXT)
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Any failure of a single submission attempt.
#[derive(Error, Debug)]
pub enum ContactError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl ContactError {
    /// The text of the notification this error surfaces as.
    pub fn notification_text(&self) -> String {
        match self {
            Self::Config(_) => CONFIG_ERROR_TEXT.to_string(),
            Self::Validation(e) => e.to_string(),
            Self::Delivery(e) => e.notification_text().to_string(),
        }
    }
}

/// Convenience type alias for Results with DeliveryError
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::MissingVar("EMAILJS_PUBLIC_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: EMAILJS_PUBLIC_KEY"
        );

        let err = DeliveryError::Timeout;
        assert_eq!(err.to_string(), "Request timeout");
    }

    #[test]
    fn test_rejected_prefers_api_text() {
        let err = DeliveryError::Rejected {
            status: 400,
            text: "The Public Key is invalid".to_string(),
        };
        assert_eq!(err.api_text(), Some("The Public Key is invalid"));
        assert_eq!(err.notification_text(), "The Public Key is invalid");
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn test_blank_api_text_falls_back() {
        let err = DeliveryError::Rejected {
            status: 500,
            text: "   ".to_string(),
        };
        assert_eq!(err.api_text(), None);
        assert_eq!(err.notification_text(), DELIVERY_FALLBACK_TEXT);
    }

    #[test]
    fn test_transport_error_falls_back() {
        let err = DeliveryError::Transport("Connection failed".to_string());
        assert_eq!(err.notification_text(), DELIVERY_FALLBACK_TEXT);
    }

    #[test]
    fn test_contact_error_notification_text() {
        let err: ContactError = ConfigError::MissingVar("EMAILJS_SERVICE_ID".to_string()).into();
        assert_eq!(err.notification_text(), CONFIG_ERROR_TEXT);

        let err: ContactError = ValidationError::InvalidEmail.into();
        assert_eq!(err.notification_text(), "Invalid E-mail");

        let err: ContactError = DeliveryError::Timeout.into();
        assert_eq!(err.notification_text(), DELIVERY_FALLBACK_TEXT);
    }
}
