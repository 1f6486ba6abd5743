//! Contact form state.
//!
//! `ContactForm` is the mutable state behind the three input controls. It is
//! owned by exactly one form instance and holds whatever the user has typed,
//! valid or not.

use super::errors::UnknownField;
use std::fmt;
use std::str::FromStr;

/// One of the three input controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// All fields in validation order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Maximum length the control accepts, in UTF-16 code units as a
    /// browser `maxlength` counts them.
    pub fn max_len(self) -> usize {
        match self {
            Field::Name => 200,
            Field::Email => 100,
            Field::Message => 500,
        }
    }

    /// Control name as used in change events.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Placeholder shown in an empty control.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "Your email",
            Field::Message => "Your message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "message" => Ok(Field::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// The three text fields of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
}

impl ContactForm {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a form from raw values, applying the same limits as typing would.
    pub fn with_values(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let mut form = Self::new();
        form.set(Field::Name, name);
        form.set(Field::Email, email);
        form.set(Field::Message, message);
        form
    }

    /// Replace a field's value. Input past the field's limit is dropped, the
    /// way a `maxlength` control refuses extra keystrokes.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let mut value = value.into();
        truncate_utf16(&mut value, field.max_len());
        *self.slot_mut(field) = value;
    }

    /// Current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Clear all three fields.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// True when every field is the empty string.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

/// Cut a string down to at most `max` UTF-16 code units. A character that
/// would straddle the limit (a surrogate pair) is dropped whole.
fn truncate_utf16(value: &mut String, max: usize) {
    let mut units = 0;
    for (idx, c) in value.char_indices() {
        units += c.len_utf16();
        if units > max {
            value.truncate(idx);
            return;
        }
    }
}
