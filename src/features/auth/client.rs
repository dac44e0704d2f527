//! Client wrappers for the auth endpoints. A successful login or registration is
//! recorded in the session store before the response is handed back; failures
//! are returned unchanged with no retry.

use crate::{
    client::{ApiClient, ClientError},
    features::auth::types::{LoginRequest, RegisterRequest},
    session::{AuthResponse, KeyValueStore},
};
use tracing::{info, instrument};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";

#[derive(Clone, Debug)]
pub struct AuthClient<S> {
    api: ApiClient<S>,
}

impl<S: KeyValueStore> AuthClient<S> {
    pub fn new(api: ApiClient<S>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient<S> {
        &self.api
    }

    /// Signs in and stores the returned token.
    ///
    /// # Errors
    /// Returns the API error unchanged, or a session error if the token cannot be stored.
    #[instrument(skip_all, fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let response: AuthResponse = self.api.post_json("login", LOGIN_PATH, request).await?;
        self.api.session().record_authentication(&response)?;
        info!("signed in");
        Ok(response)
    }

    /// Creates an account and stores the returned token.
    ///
    /// # Errors
    /// Same as [`AuthClient::login`].
    #[instrument(skip_all, fields(email = %request.email, username = %request.username))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let response: AuthResponse = self
            .api
            .post_json("registration", REGISTER_PATH, request)
            .await?;
        self.api.session().record_authentication(&response)?;
        info!("account registered");
        Ok(response)
    }

    /// Clears the local session. There is no server-side logout.
    ///
    /// # Errors
    /// Returns an error if the session storage cannot be written.
    pub fn logout(&self) -> Result<(), ClientError> {
        self.api.session().clear_session()?;
        info!("signed out");
        Ok(())
    }
}
