//! Form controller: the glue between the form state, the validator and the submitter.
//!
//! The controller is a two-state machine:
//!
//! ```text
//!            submit, valid                 settled
//!   Idle ──────────────────────▶ Submitting ───────▶ Idle
//!    ▲  │
//!    └──┘ submit, invalid (notify, keep fields)
//! ```
//!
//! `submit` takes `&mut self`, so a second submit cannot start while one is
//! in flight. Entering `Submitting` emits the loading notification; leaving
//! it always happens, even when the caller drops the `submit` future.

use crate::domain::{validate, ContactForm, Field, ValidationError};
use crate::error::ContactError;
use crate::notification::{Notification, Notifier, SENDING_TEXT};
use crate::submitter::Submitter;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// What a submit event led to.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// The form broke a rule; nothing was sent.
    Invalid(ValidationError),
    /// The delivery API accepted the message.
    Delivered,
    /// Configuration was missing or delivery failed.
    Failed(ContactError),
}

impl SubmissionOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

/// Puts the phase back to `Idle` when dropped.
struct SubmittingGuard<'a> {
    phase: &'a mut Phase,
}

impl<'a> SubmittingGuard<'a> {
    fn enter(phase: &'a mut Phase) -> Self {
        *phase = Phase::Submitting;
        Self { phase }
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        *self.phase = Phase::Idle;
    }
}

/// One contact form instance and the state it owns.
pub struct FormController {
    form: ContactForm,
    phase: Phase,
    submitter: Submitter,
    notifier: Arc<dyn Notifier>,
}

impl FormController {
    pub fn new(submitter: Submitter, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            form: ContactForm::new(),
            phase: Phase::Idle,
            submitter,
            notifier,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Apply a change event to one field.
    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Handle a submit event.
    ///
    /// Validates, sends, notifies and settles. Fields are reset once a
    /// delivery request has settled, whatever its result; a validation or
    /// configuration failure leaves them as they were, and so does dropping
    /// the future before the request settles.
    pub async fn submit(&mut self) -> SubmissionOutcome {
        let message = match validate(&self.form) {
            Ok(message) => message,
            Err(e) => {
                debug!("Validation failed: {:?}", e);
                self.notifier.notify(Notification::error(e.to_string()));
                return SubmissionOutcome::Invalid(e);
            }
        };

        let result = {
            let _submitting = SubmittingGuard::enter(&mut self.phase);
            self.notifier.notify(Notification::info(SENDING_TEXT));
            self.submitter.submit(&message).await
        };

        match result {
            Ok(()) => {
                self.notifier.notify(Notification::delivered());
                self.form.reset();
                SubmissionOutcome::Delivered
            }
            Err(e) => {
                self.notifier.notify(Notification::from(&e));
                // no request went out, so there is nothing to reset
                if !matches!(e, ContactError::Config(_)) {
                    self.form.reset();
                }
                SubmissionOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_sets_and_restores_phase() {
        let mut phase = Phase::Idle;
        {
            let guard = SubmittingGuard::enter(&mut phase);
            assert_eq!(*guard.phase, Phase::Submitting);
        }
        assert_eq!(phase, Phase::Idle);
    }
}
