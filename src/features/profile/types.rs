//! Types for the `/users/profile` endpoints. Profiles are request-scoped and never
//! persisted locally.

use crate::features::forms::serialize_optional_secret;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub enabled: bool,
}

/// Partial profile update; absent fields are left unchanged by the server.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_secret"
    )]
    pub password: Option<SecretString>,
}

impl ProfileUpdate {
    /// Drops an empty password so it is never sent as "change to empty".
    #[must_use]
    pub fn without_empty_password(mut self) -> Self {
        if self
            .password
            .as_ref()
            .is_some_and(|password| password.expose_secret().is_empty())
        {
            self.password = None;
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }
}
