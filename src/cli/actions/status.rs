use crate::{
    cli::{actions::report, globals::GlobalArgs},
    session::{KeyValueStore, SessionStore},
};
use anyhow::Result;

/// # Errors
/// Returns an error if the session file cannot be opened.
pub fn handle(globals: &GlobalArgs) -> Result<()> {
    let session = globals.session().map_err(report)?;
    println!("{}", status_line(&session));
    Ok(())
}

#[must_use]
pub fn status_line<S: KeyValueStore>(session: &SessionStore<S>) -> String {
    if session.is_authenticated() {
        format!("Signed in as {}.", session.current_display_name())
    } else {
        "Not signed in.".to_string()
    }
}
