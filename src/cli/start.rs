use crate::{
    cli::{
        actions::Action,
        commands::{
            self,
            api::{ARG_API_URL, ARG_SESSION_DIR, ARG_TIMEOUT},
            logging::ARG_VERBOSITY,
        },
        dispatch::handler,
        globals::GlobalArgs,
        telemetry,
    },
    client::ClientConfig,
};
use anyhow::{Context, Result};

/// Parse arguments, initialize logging and resolve the action to run.
/// # Errors
/// Returns an error if logging or the client configuration cannot be set up.
pub fn start() -> Result<(Action, GlobalArgs)> {
    let matches = commands::new().get_matches();

    let verbosity = matches.get_one::<u8>(ARG_VERBOSITY).copied().unwrap_or(0);
    telemetry::init(Some(telemetry::level_from_verbosity(verbosity)))?;

    let globals = globals_from(&matches)?;
    let action = handler(&matches)?;

    Ok((action, globals))
}

/// # Errors
/// Returns an error if the API URL or session directory is invalid.
pub fn globals_from(matches: &clap::ArgMatches) -> Result<GlobalArgs> {
    let config = ClientConfig::new(
        matches.get_one::<String>(ARG_API_URL).map(String::as_str),
        matches.get_one::<u64>(ARG_TIMEOUT).copied(),
        matches.get_one::<String>(ARG_SESSION_DIR).map(String::as_str),
    )
    .context("invalid client configuration")?;

    Ok(GlobalArgs::new(config))
}
