use crate::{
    client::ClientError,
    session::{KeyValueStore, SessionStore},
};

/// Gate for commands that need a signed-in user.
/// UX-only guard; real access control must live on the API.
///
/// # Errors
/// Returns [`ClientError::Unauthenticated`] when no token is stored.
pub fn require_authenticated<S: KeyValueStore>(store: &SessionStore<S>) -> Result<(), ClientError> {
    if store.is_authenticated() {
        Ok(())
    } else {
        Err(ClientError::Unauthenticated)
    }
}

/// Returns a notice when the user is already signed in, used by login and
/// register before they replace the current session.
pub fn redirect_if_authenticated<S: KeyValueStore>(store: &SessionStore<S>) -> Option<String> {
    store.is_authenticated().then(|| {
        format!(
            "Already signed in as {}; the current session will be replaced.",
            store.current_display_name()
        )
    })
}
