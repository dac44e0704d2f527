//! Client configuration: API endpoint, request timeout and where the session
//! file lives. Values come from CLI flags or their environment variables; blank
//! values fall back to defaults. Configuration values are public; do not store
//! secrets here.

use super::ClientError;
use directories::ProjectDirs;
use std::{path::PathBuf, time::Duration};
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
/// Default request timeout applied to every API call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_base_url: Url,
    pub timeout: Duration,
    pub session_dir: PathBuf,
}

impl ClientConfig {
    /// Builds a config from raw (possibly blank) values.
    ///
    /// # Errors
    /// Returns [`ClientError::Config`] if the base URL is not an http(s) URL or no
    /// session directory can be determined.
    pub fn new(
        api_base_url: Option<&str>,
        timeout_secs: Option<u64>,
        session_dir: Option<&str>,
    ) -> Result<Self, ClientError> {
        let api_base_url = api_base_url
            .and_then(normalize_value)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = parse_base_url(&api_base_url)?;

        let timeout = Duration::from_secs(
            timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        );

        let session_dir = match session_dir.and_then(normalize_value) {
            Some(dir) => PathBuf::from(dir),
            None => default_session_dir()?,
        };

        Ok(Self {
            api_base_url,
            timeout,
            session_dir,
        })
    }

    /// Resolves an API path against the configured base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        build_url_with_base(self.api_base_url.as_str(), path)
    }
}

fn parse_base_url(value: &str) -> Result<Url, ClientError> {
    let url = Url::parse(value)
        .map_err(|err| ClientError::Config(format!("Invalid API base URL {value}: {err}")))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ClientError::Config(format!(
                "Unsupported API URL scheme: {scheme}"
            )))
        }
    }

    if url.host().is_none() {
        return Err(ClientError::Config(
            "API base URL has no host.".to_string(),
        ));
    }

    Ok(url)
}

fn default_session_dir() -> Result<PathBuf, ClientError> {
    ProjectDirs::from("dev", "expense-tracker", env!("CARGO_PKG_NAME"))
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            ClientError::Config(
                "Unable to determine a session directory; pass --session-dir.".to_string(),
            )
        })
}

/// Builds a URL from an explicit base URL and the provided path.
pub(crate) fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
