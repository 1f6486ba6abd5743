//! Validated contact message.

use super::email::EmailAddress;
use super::errors::ValidationError;
use super::form::ContactForm;

/// Minimum trimmed length of the sender's name.
pub const MIN_NAME_LEN: usize = 3;

/// Minimum trimmed length of the message body.
pub const MIN_MESSAGE_LEN: usize = 5;

/// A form that passed validation, ready to hand to the delivery API.
///
/// Field values are kept exactly as entered so the relayed email matches
/// what the user submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    name: String,
    email: String,
    address: EmailAddress,
    message: String,
}

impl ContactMessage {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The email as typed.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The email trimmed and checked.
    pub fn address(&self) -> &EmailAddress {
        &self.address
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Check the form and report the first rule it breaks.
///
/// Rules run in order: name, email, message. The form is never modified.
///
/// # Errors
///
/// Returns the `ValidationError` for the first failing rule.
pub fn validate(form: &ContactForm) -> Result<ContactMessage, ValidationError> {
    if trimmed_len(form.name()) < MIN_NAME_LEN {
        return Err(ValidationError::InvalidName);
    }

    let address = EmailAddress::new(form.email())?;

    if trimmed_len(form.message()) < MIN_MESSAGE_LEN {
        return Err(ValidationError::InvalidMessage);
    }

    Ok(ContactMessage {
        name: form.name().to_string(),
        email: form.email().to_string(),
        address,
        message: form.message().to_string(),
    })
}

/// Trimmed length in UTF-16 code units, matching browser string length.
fn trimmed_len(value: &str) -> usize {
    value.trim().encode_utf16().count()
}
