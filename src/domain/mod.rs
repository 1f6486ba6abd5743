//! Domain value objects and types.
//!
//! This module contains the contact form state, the validated message it
//! turns into, and the email address value object. Validation happens once,
//! when a `ContactForm` is converted into a `ContactMessage`, so an invalid
//! message can never reach the delivery API.

pub mod email;
pub mod errors;
pub mod form;
pub mod message;

pub use email::EmailAddress;
pub use errors::{UnknownField, ValidationError};
pub use form::{ContactForm, Field};
pub use message::{validate, ContactMessage};
