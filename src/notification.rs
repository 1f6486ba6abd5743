//! Transient user-facing notifications.
//!
//! Notifications are short-lived toasts: they are handed to a [`Notifier`]
//! and forgotten. Nothing here is persisted.

use crate::error::ContactError;
use std::fmt;
use std::io::Write;
use std::sync::Mutex;

/// Shown when the delivery API accepts the message.
pub const SUCCESS_TEXT: &str = "Thank You. I will get back to you as soon as possible.";

/// Loading indicator, shown once a valid form starts sending.
pub const SENDING_TEXT: &str = "Sending...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            text: text.into(),
        }
    }

    /// The notification for a delivered message.
    pub fn delivered() -> Self {
        Self::success(SUCCESS_TEXT)
    }
}

impl From<&ContactError> for Notification {
    fn from(err: &ContactError) -> Self {
        Self::error(err.notification_text())
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.level {
            NotificationLevel::Success => "✔",
            NotificationLevel::Error => "✖",
            NotificationLevel::Info => "ℹ",
        };
        write!(f, "{} {}", marker, self.text)
    }
}

/// Something that can show a notification to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes each notification as one line to a writer (stdout in the binary).
pub struct ConsoleNotifier<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Take the writer back out.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> Notifier for ConsoleNotifier<W> {
    fn notify(&self, notification: Notification) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{}", notification).and_then(|_| out.flush()) {
            tracing::warn!("Failed to display notification: {}", e);
        }
    }
}
