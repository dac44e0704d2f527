//! Shared form validation. Forms are validated locally before any request is
//! built, so invalid input never reaches the network layer.

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::Serializer;
use std::fmt;

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub code: &'static str,
    pub message: String,
}

/// All field errors of one form submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, code: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            code,
            message: message.into(),
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    #[must_use]
    pub fn has(&self, field: &str, code: &str) -> bool {
        self.errors
            .iter()
            .any(|err| err.field == field && err.code == code)
    }

    /// Returns `Ok(value)` when no errors were collected.
    ///
    /// # Errors
    /// Returns `self` when at least one field failed validation.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|err| err.message.as_str()).collect();
        write!(formatter, "{}", messages.join(" "))
    }
}

impl std::error::Error for FormErrors {}

#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Required and well-formed email check shared by the forms.
pub(crate) fn check_email(errors: &mut FormErrors, email: &str) {
    if email.is_empty() {
        errors.push("email", "required", "Email is required.");
    } else if !valid_email(email) {
        errors.push("email", "email", "Valid email is required.");
    }
}

/// `serialize_with` target for passwords in request bodies.
pub(crate) fn serialize_secret<S: Serializer>(
    secret: &SecretString,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

#[allow(clippy::ref_option)]
pub(crate) fn serialize_optional_secret<S: Serializer>(
    secret: &Option<SecretString>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match secret {
        Some(secret) => serializer.serialize_some(secret.expose_secret()),
        None => serializer.serialize_none(),
    }
}
