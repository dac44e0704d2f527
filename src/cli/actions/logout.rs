use crate::cli::{actions::report, globals::GlobalArgs};
use anyhow::{Context, Result};

/// # Errors
/// Returns an error if the session file cannot be updated.
pub fn handle(globals: &GlobalArgs) -> Result<()> {
    let session = globals.session().map_err(report)?;
    session.clear_session().context("failed to sign out")?;
    println!("Signed out.");
    Ok(())
}
