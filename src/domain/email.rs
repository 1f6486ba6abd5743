//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// `local@domain.tld`: no whitespace or extra `@` anywhere, at least one dot
/// after the `@`.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// A type-safe wrapper for email addresses.
///
/// The check is intentionally shallow: it accepts some addresses a mail
/// server would refuse (consecutive dots, odd TLDs) and that is kept as is.
///
/// # Example
///
/// ```
/// use portfolio_contact::domain::EmailAddress;
///
/// let email = EmailAddress::new("  user@example.com ").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress from user input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the trimmed input does not
    /// match the pattern.
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = email.as_ref().trim();

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Check a string against the email pattern after trimming.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_PATTERN.is_match(email.trim())
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        // the pattern guarantees exactly one '@'
        self.0.split_once('@').map(|(_, d)| d).unwrap_or_default()
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("a@b.com").unwrap();
        assert_eq!(email.as_str(), "a@b.com");
        assert_eq!(email.domain(), "b.com");
    }

    #[test]
    fn test_email_is_trimmed() {
        let email = EmailAddress::new("\t alice@example.org  ").unwrap();
        assert_eq!(email.as_str(), "alice@example.org");
    }

    #[test]
    fn test_email_validates_format() {
        assert!(EmailAddress::new("not-an-email").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("user@").is_err());
        assert!(EmailAddress::new("user@domain").is_err());
        assert!(EmailAddress::new("user@@example.com").is_err());
        assert!(EmailAddress::new("us er@example.com").is_err());
        assert!(EmailAddress::new("user@exa mple.com").is_err());
        assert!(EmailAddress::new("").is_err());
        assert!(EmailAddress::new("   ").is_err());
        assert!(EmailAddress::new("user.name+tag@example.co.uk").is_ok());
        assert!(EmailAddress::new("USER@EXAMPLE.COM").is_ok());
    }

    #[test]
    fn test_shallow_pattern_accepts_odd_addresses() {
        // Kept permissive on purpose; these pass the pattern.
        assert!(EmailAddress::is_valid("a..b@c.d"));
        assert!(EmailAddress::is_valid("a@b..c"));
    }

    #[test]
    fn test_email_error_kind() {
        assert_eq!(
            EmailAddress::new("nope").unwrap_err(),
            ValidationError::InvalidEmail
        );
    }

    #[test]
    fn test_email_display() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(format!("{}", email), "user@example.com");
    }

    #[test]
    fn test_email_serialization() {
        let email = EmailAddress::new("user@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"user@example.com\"");
    }
}
