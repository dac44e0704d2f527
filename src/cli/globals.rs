use crate::{
    client::{ApiClient, ClientConfig, ClientError},
    session::{FileStore, SessionStore},
};
use std::sync::Arc;

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub config: ClientConfig,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Opens the session file under the configured session directory.
    ///
    /// # Errors
    /// Returns an error if the session directory cannot be created.
    pub fn session(&self) -> Result<Arc<SessionStore<FileStore>>, ClientError> {
        let storage = FileStore::open(&self.config.session_dir).map_err(|err| {
            ClientError::Config(format!("Unable to open session storage: {err}"))
        })?;
        Ok(Arc::new(SessionStore::new(storage)))
    }

    /// Builds the shared transport around the persisted session.
    ///
    /// # Errors
    /// Returns an error if the session storage or HTTP client cannot be set up.
    pub fn api(&self) -> Result<ApiClient<FileStore>, ClientError> {
        ApiClient::new(self.config.clone(), self.session()?)
    }
}
