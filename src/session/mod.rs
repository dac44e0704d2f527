//! Client-side session state. The session is binary: authenticated while a
//! non-empty token is stored, anonymous otherwise. The display name is cosmetic
//! and is never reported without a token next to it.

pub mod guards;
pub mod storage;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;
use tracing::{debug, instrument, warn};

pub use self::storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

pub const TOKEN_KEY: &str = "authToken";
pub const DISPLAY_NAME_KEY: &str = "username";
/// Shown when no display name is known.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("authentication response carried an empty token")]
    EmptyToken,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Credential payload returned by `/auth/login` and `/auth/register`.
#[derive(Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default, rename = "displayName", alias = "username")]
    pub display_name: Option<String>,
}

impl AuthResponse {
    #[must_use]
    pub fn new(token: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            token: token.into(),
            display_name,
        }
    }
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("token", &"***")
            .field("display_name", &self.display_name)
            .finish()
    }
}

/// Point-in-time view of the stored session.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: Option<SecretString>,
    pub display_name: Option<String>,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Single owner of the durable token.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Stores the token from a successful login or registration. The display
    /// name is only replaced when the response carries one.
    ///
    /// # Errors
    /// Returns [`SessionError::EmptyToken`] for a blank token, or a storage error.
    #[instrument(skip_all, fields(has_display_name = response.display_name.is_some()))]
    pub fn record_authentication(&self, response: &AuthResponse) -> Result<(), SessionError> {
        if response.token.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }

        self.storage.set(TOKEN_KEY, &response.token)?;

        if let Some(name) = response
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
        {
            self.storage.set(DISPLAY_NAME_KEY, name)?;
        }

        debug!("session recorded");
        Ok(())
    }

    /// Removes the token and display name. Clearing an empty session is a no-op.
    ///
    /// # Errors
    /// Returns an error if the storage cannot be written.
    #[instrument(skip_all)]
    pub fn clear_session(&self) -> Result<(), SessionError> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(DISPLAY_NAME_KEY)?;
        debug!("session cleared");
        Ok(())
    }

    /// Returns the stored token. Read failures are logged and reported as absent.
    pub fn current_token(&self) -> Option<SecretString> {
        self.read(TOKEN_KEY)
            .filter(|token| !token.is_empty())
            .map(SecretString::from)
    }

    /// Returns the stored display name, or [`DEFAULT_DISPLAY_NAME`].
    pub fn current_display_name(&self) -> String {
        self.session()
            .display_name
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_token()
            .is_some_and(|token| !token.expose_secret().is_empty())
    }

    pub fn session(&self) -> Session {
        let token = self.current_token();
        let display_name = if token.is_some() {
            self.read(DISPLAY_NAME_KEY).filter(|name| !name.is_empty())
        } else {
            None
        };

        Session {
            token,
            display_name,
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("failed to read {key} from session storage: {err}");
                None
            }
        }
    }
}
