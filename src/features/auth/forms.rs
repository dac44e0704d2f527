//! Login and registration forms. Submitting validates first and only then calls
//! the auth client.

use super::{
    client::AuthClient,
    types::{LoginRequest, RegisterRequest},
};
use crate::{
    client::ClientError,
    features::forms::{check_email, normalize_email, FormErrors, MIN_PASSWORD_LENGTH},
    session::{AuthResponse, KeyValueStore},
};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

impl LoginForm {
    /// # Errors
    /// Returns every failing field.
    pub fn validate(&self) -> Result<LoginRequest, FormErrors> {
        let mut errors = FormErrors::new();
        let email = normalize_email(&self.email);

        check_email(&mut errors, &email);
        if self.password.expose_secret().is_empty() {
            errors.push("password", "required", "Password is required.");
        }

        errors.into_result(LoginRequest {
            email,
            password: self.password.clone(),
        })
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    pub email: String,
    pub username: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl RegisterForm {
    /// # Errors
    /// Returns every failing field, including a `mismatch` on `confirm_password`.
    pub fn validate(&self) -> Result<RegisterRequest, FormErrors> {
        let mut errors = FormErrors::new();
        let email = normalize_email(&self.email);
        let username = self.username.trim().to_string();
        let password = self.password.expose_secret();
        let confirm_password = self.confirm_password.expose_secret();

        check_email(&mut errors, &email);

        if username.is_empty() {
            errors.push("username", "required", "Username is required.");
        }

        if password.trim().is_empty() {
            errors.push("password", "required", "Password is required.");
        } else if password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push(
                "password",
                "minlength",
                format!("Password must be at least {MIN_PASSWORD_LENGTH} characters."),
            );
        }

        if confirm_password.is_empty() {
            errors.push(
                "confirm_password",
                "required",
                "Please confirm your password.",
            );
        } else if password != confirm_password {
            errors.push("confirm_password", "mismatch", "Passwords do not match.");
        }

        errors.into_result(RegisterRequest {
            email,
            username,
            password: self.password.clone(),
            first_name: optional(self.first_name.as_deref()),
            last_name: optional(self.last_name.as_deref()),
        })
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Validates the form and signs in.
///
/// # Errors
/// Returns [`ClientError::Validation`] without any request when the form is invalid.
pub async fn submit_login<S: KeyValueStore>(
    client: &AuthClient<S>,
    form: &LoginForm,
) -> Result<AuthResponse, ClientError> {
    let request = form.validate().inspect_err(|errors| {
        debug!(fields = errors.errors().len(), "login form rejected");
    })?;
    client.login(&request).await
}

/// Validates the form and registers.
///
/// # Errors
/// Returns [`ClientError::Validation`] without any request when the form is invalid.
pub async fn submit_register<S: KeyValueStore>(
    client: &AuthClient<S>,
    form: &RegisterForm,
) -> Result<AuthResponse, ClientError> {
    let request = form.validate().inspect_err(|errors| {
        debug!(fields = errors.errors().len(), "register form rejected");
    })?;
    client.register(&request).await
}
