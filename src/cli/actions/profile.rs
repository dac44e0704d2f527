use crate::{
    cli::{actions::report, globals::GlobalArgs},
    client::{ApiClient, ClientError},
    features::profile::{ProfileClient, ProfileForm, ProfileUpdate, UserProfile},
    session::{guards::require_authenticated, KeyValueStore},
};
use anyhow::{bail, Result};

#[derive(Debug)]
pub enum Args {
    Show,
    /// Fields typed on the command line; anything absent keeps the stored value.
    Update(ProfileUpdate),
    Delete { confirmed: bool },
}

/// # Errors
/// Returns an error if nobody is signed in or the API call fails.
pub async fn handle(args: Args, globals: &GlobalArgs) -> Result<()> {
    let api = globals.api().map_err(report)?;

    match args {
        Args::Show => {
            let profile = show(api).await.map_err(report)?;
            print!("{}", render(&profile));
        }
        Args::Update(overrides) => {
            if overrides.is_empty() {
                bail!("Nothing to update. Pass --username, --email or --password.");
            }
            let profile = update(api, overrides).await.map_err(report)?;
            println!("Profile updated.");
            print!("{}", render(&profile));
        }
        Args::Delete { confirmed } => {
            if !confirmed {
                bail!("Deleting your account cannot be undone. Re-run with --yes to confirm.");
            }
            delete(api).await.map_err(report)?;
            println!("Account deleted. You have been signed out.");
        }
    }

    Ok(())
}

/// # Errors
/// Returns [`ClientError::Unauthenticated`] before any request when no token is stored.
pub async fn show<S: KeyValueStore>(api: ApiClient<S>) -> Result<UserProfile, ClientError> {
    require_authenticated(api.session())?;
    ProfileClient::new(api).get_profile().await
}

/// Loads the profile into the editor, applies the overrides, validates and saves.
///
/// # Errors
/// Returns validation errors before the PATCH, or transport and HTTP errors.
pub async fn update<S: KeyValueStore>(
    api: ApiClient<S>,
    overrides: ProfileUpdate,
) -> Result<UserProfile, ClientError> {
    require_authenticated(api.session())?;
    let client = ProfileClient::new(api);

    let mut form = ProfileForm::from_profile(&client.get_profile().await?);
    if let Some(username) = overrides.username {
        form.username = username;
    }
    if let Some(email) = overrides.email {
        form.email = email;
    }
    if let Some(password) = overrides.password {
        form.password = password;
    }

    let update = form.validate()?;
    client.patch_profile(update).await
}

/// Deletes the account and clears the local session.
///
/// # Errors
/// Returns transport or HTTP errors; the session is kept when the delete fails.
pub async fn delete<S: KeyValueStore>(api: ApiClient<S>) -> Result<(), ClientError> {
    require_authenticated(api.session())?;
    let client = ProfileClient::new(api);
    client.delete_profile().await?;
    client.api().session().clear_session()?;
    Ok(())
}

#[must_use]
pub fn render(profile: &UserProfile) -> String {
    format!(
        "Username: {}\nEmail:    {}\nRole:     {}\nEnabled:  {}\n",
        profile.username, profile.email, profile.role, profile.enabled
    )
}
