use super::types::{ProfileUpdate, UserProfile};
use crate::features::forms::{check_email, normalize_email, FormErrors};
use secrecy::SecretString;

/// Profile editor state, prefilled from the fetched profile. The password is
/// always blank until the user types a new one.
#[derive(Clone, Debug, Default)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
    pub password: SecretString,
}

impl ProfileForm {
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            username: profile.username.clone(),
            email: profile.email.clone(),
            password: SecretString::default(),
        }
    }

    /// # Errors
    /// Returns every failing field.
    pub fn validate(&self) -> Result<ProfileUpdate, FormErrors> {
        let mut errors = FormErrors::new();
        let username = self.username.trim().to_string();
        let email = normalize_email(&self.email);

        if username.is_empty() {
            errors.push("username", "required", "Username is required.");
        }
        check_email(&mut errors, &email);

        errors.into_result(
            ProfileUpdate {
                username: Some(username),
                email: Some(email),
                password: Some(self.password.clone()),
            }
            .without_empty_password(),
        )
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
