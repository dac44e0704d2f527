//! Request payloads for the auth endpoints. Passwords stay in `SecretString`
//! and are only exposed while the body is serialized.

use crate::features::forms::serialize_secret;
use secrecy::SecretString;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(serialize_with = "serialize_secret")]
    pub password: SecretString,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    #[serde(serialize_with = "serialize_secret")]
    pub password: SecretString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}
