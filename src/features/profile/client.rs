//! Client helpers for the current user's profile. Authorization is the
//! transport's job; these helpers only keep endpoint paths in one place.

use crate::{
    client::{ApiClient, ClientError},
    features::profile::types::{ProfileUpdate, UserProfile},
    session::KeyValueStore,
};
use tracing::{info, instrument};

pub const PROFILE_PATH: &str = "/users/profile";

#[derive(Clone, Debug)]
pub struct ProfileClient<S> {
    api: ApiClient<S>,
}

impl<S: KeyValueStore> ProfileClient<S> {
    pub fn new(api: ApiClient<S>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient<S> {
        &self.api
    }

    /// Fetches the authenticated user's profile.
    /// # Errors
    /// Returns transport, HTTP or decoding errors.
    #[instrument(skip_all)]
    pub async fn get_profile(&self) -> Result<UserProfile, ClientError> {
        self.api.get_json(PROFILE_PATH).await
    }

    /// Applies a partial update. An empty password is removed before sending.
    /// # Errors
    /// Returns transport, HTTP or decoding errors, or [`ClientError::Pending`].
    #[instrument(skip_all)]
    pub async fn patch_profile(&self, update: ProfileUpdate) -> Result<UserProfile, ClientError> {
        let update = update.without_empty_password();
        let updated: UserProfile = self
            .api
            .patch_json("profile update", PROFILE_PATH, &update)
            .await?;
        info!(id = updated.id, "profile updated");
        Ok(updated)
    }

    /// Deletes the account. The caller clears the session afterwards.
    /// # Errors
    /// Returns transport or HTTP errors, or [`ClientError::Pending`].
    #[instrument(skip_all)]
    pub async fn delete_profile(&self) -> Result<(), ClientError> {
        self.api.delete("profile delete", PROFILE_PATH).await?;
        info!("profile deleted");
        Ok(())
    }
}
