//! HTTP transport for the expense-tracker API with consistent timeouts and error
//! handling. Feature clients go through these helpers so request setup is not
//! duplicated. The stored session token is attached as a bearer header here and
//! nowhere else; request bodies are never logged.

use super::{config::ClientConfig, errors::ClientError, gate::MutationGate};
use crate::{
    session::{KeyValueStore, SessionStore},
    APP_USER_AGENT,
};
use reqwest::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    Client, Method, RequestBuilder, Response, StatusCode,
};
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Serialize};
use std::{fmt, sync::Arc};
use tracing::{debug, error, info_span, Instrument};
use ulid::Ulid;

/// Maximum number of error body characters surfaced to the user.
const MAX_ERROR_CHARS: usize = 200;
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Shared transport. Clones share the HTTP pool, the session and the mutation gate.
pub struct ApiClient<S> {
    http: Client,
    config: ClientConfig,
    session: Arc<SessionStore<S>>,
    gate: MutationGate,
}

impl<S> Clone for ApiClient<S> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            config: self.config.clone(),
            session: Arc::clone(&self.session),
            gate: self.gate.clone(),
        }
    }
}

impl<S> fmt::Debug for ApiClient<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_base_url", &self.config.api_base_url.as_str())
            .field("timeout", &self.config.timeout)
            .field("busy", &self.gate.is_busy())
            .finish_non_exhaustive()
    }
}

impl<S: KeyValueStore> ApiClient<S> {
    /// # Errors
    /// Returns [`ClientError::Config`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig, session: Arc<SessionStore<S>>) -> Result<Self, ClientError> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|err| ClientError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            config,
            session,
            gate: MutationGate::new(),
        })
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn gate(&self) -> &MutationGate {
        &self.gate
    }

    /// Fetches JSON, authenticated when a session exists.
    /// # Errors
    /// Returns transport, HTTP or decoding errors.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.send(self.request(Method::GET, path)).await?;
        handle_json_response(response).await
    }

    /// Posts JSON and parses a JSON response. Holds the mutation permit for `action`.
    /// # Errors
    /// Returns [`ClientError::Pending`] if another mutation is in flight, or
    /// transport, HTTP or decoding errors.
    pub async fn post_json<B, T>(
        &self,
        action: &'static str,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let _permit = self.gate.try_acquire(action)?;
        let builder = with_json_body(self.request(Method::POST, path), body)?;
        let response = self.send(builder).await?;
        handle_json_response(response).await
    }

    /// Patches with a JSON body and parses a JSON response.
    /// # Errors
    /// Same as [`ApiClient::post_json`].
    pub async fn patch_json<B, T>(
        &self,
        action: &'static str,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let _permit = self.gate.try_acquire(action)?;
        let builder = with_json_body(self.request(Method::PATCH, path), body)?;
        let response = self.send(builder).await?;
        handle_json_response(response).await
    }

    /// Sends a DELETE and expects an empty response body.
    /// # Errors
    /// Same as [`ApiClient::post_json`].
    pub async fn delete(&self, action: &'static str, path: &str) -> Result<(), ClientError> {
        let _permit = self.gate.try_acquire(action)?;
        let response = self.send(self.request(Method::DELETE, path)).await?;
        handle_empty_response(response).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        let builder = self
            .http
            .request(method, url)
            .header(REQUEST_ID_HEADER, Ulid::new().to_string());

        match self.session.current_token() {
            Some(token) => builder.header(
                AUTHORIZATION,
                format!("Bearer {}", token.expose_secret()),
            ),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ClientError> {
        let request = builder
            .build()
            .map_err(|err| ClientError::Serialization(format!("Failed to build request: {err}")))?;

        let span = info_span!(
            "api.request",
            http.method = %request.method(),
            url = %request.url()
        );

        async {
            let response = self.http.execute(request).await.map_err(|err| {
                error!("request failed: {err}");
                map_request_error(&err)
            })?;
            debug!(status = response.status().as_u16(), "response received");
            Ok::<_, ClientError>(response)
        }
        .instrument(span)
        .await
    }
}

fn with_json_body<B: Serialize + ?Sized>(
    builder: RequestBuilder,
    body: &B,
) -> Result<RequestBuilder, ClientError> {
    let payload = serde_json::to_vec(body)
        .map_err(|err| ClientError::Serialization(format!("Failed to encode request: {err}")))?;
    Ok(builder.header(CONTENT_TYPE, "application/json").body(payload))
}

/// Maps network errors into user-facing variants with timeout detection.
fn map_request_error(err: &reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        ClientError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    if response.status().is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| ClientError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

async fn handle_empty_response(response: Response) -> Result<(), ClientError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> ClientError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = sanitize_body(&body, status);
    error!(status = status.as_u16(), "API returned an error: {message}");
    ClientError::Http {
        status: status.as_u16(),
        message,
    }
}

/// Trims and truncates error bodies for user-facing messages.
fn sanitize_body(body: &str, status: StatusCode) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Request failed.")
            .to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
