//! Domain validation errors.

use std::fmt;

/// The first form rule a submission violated.
///
/// Rules are checked in a fixed order (name, email, message), so exactly one
/// variant is ever reported per validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The name is shorter than three characters after trimming.
    InvalidName,

    /// The email does not look like `local@domain.tld`.
    InvalidEmail,

    /// The message is shorter than five characters after trimming.
    InvalidMessage,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName => write!(f, "Invalid Name"),
            Self::InvalidEmail => write!(f, "Invalid E-mail"),
            Self::InvalidMessage => write!(f, "Invalid Message"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A change event named a control the form does not have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown form field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}
