//! Portfolio Contact - the contact form of a personal portfolio site.
//!
//! A visitor fills in three fields (name, email, message). The form is checked
//! locally and, if valid, relayed as an email through the EmailJS API. Every
//! outcome is reported through one transient notification.
//!
//! # Architecture
//!
//! - **domain**: form state, the validated message and the email value object
//! - **config**: configuration from environment variables
//! - **error**: error taxonomy (configuration, validation, delivery)
//! - **client**: HTTP client for the EmailJS API
//! - **submitter**: configuration check plus a single delivery attempt
//! - **controller**: the idle/submitting state machine a UI drives
//! - **notification**: transient user-facing messages
//! - **metrics**: delivery outcome counters

pub mod client;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod notification;
pub mod submitter;

pub use client::{AsyncEmailJsClient, AsyncEmailSender, EmailJsClient, TemplateParams};
pub use config::{Config, Credentials};
pub use controller::{FormController, Phase, SubmissionOutcome};
pub use domain::{validate, ContactForm, ContactMessage, EmailAddress, Field, ValidationError};
pub use error::{ConfigError, ContactError, DeliveryError};
pub use metrics::{DeliveryMetrics, DeliverySummary};
pub use notification::{ConsoleNotifier, Notification, NotificationLevel, Notifier};
pub use submitter::Submitter;
