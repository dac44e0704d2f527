use clap::{builder::ValueParser, Arg, ArgAction, Command};

pub const ARG_VERBOSITY: &str = "verbosity";
pub const LOG_LEVEL_ENV: &str = "EXPENSE_TRACKER_LOG_LEVEL";

/// Log level names indexed by the number of `-v` flags.
pub const LEVEL_NAMES: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Accepts a level name or its `-v` count, `0` (error) through `4` (trace).
#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(|level: &str| -> Result<u8, String> {
        let level = level.trim().to_lowercase();
        let index = match level.parse::<usize>() {
            Ok(count) => (count < LEVEL_NAMES.len()).then_some(count),
            Err(_) => LEVEL_NAMES.iter().position(|name| *name == level),
        };

        index
            .and_then(|index| u8::try_from(index).ok())
            .ok_or_else(|| format!("expected one of {} or 0-4", LEVEL_NAMES.join(", ")))
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Log more on stderr: -v warn, -vv info, -vvv debug, -vvvv trace (default: error)")
            .env(LOG_LEVEL_ENV)
            .global(true)
            .action(ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}
