use crate::{features::forms::FormErrors, session::SessionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    Validation(#[from] FormErrors),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
    #[error("Not signed in. Run `login` or `register` first.")]
    Unauthenticated,
    #[error("A {0} request is already in progress.")]
    Pending(&'static str),
}

impl ClientError {
    /// HTTP status for API failures, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// User-facing message without the category prefix for input errors.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(message) => message.clone(),
            Self::Validation(errors) => errors.to_string(),
            Self::Http { status: 401, .. } => {
                "Your session is no longer valid. Please sign in again.".to_string()
            }
            _ => self.to_string(),
        }
    }
}
