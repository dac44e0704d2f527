use crate::client::config::DEFAULT_API_BASE_URL;
use clap::{Arg, Command};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_SESSION_DIR: &str = "session-dir";
pub const ARG_TIMEOUT: &str = "timeout";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_URL)
                .long(ARG_API_URL)
                .help("Expense tracker API base URL")
                .default_value(DEFAULT_API_BASE_URL)
                .env("EXPENSE_TRACKER_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_SESSION_DIR)
                .long(ARG_SESSION_DIR)
                .help("Directory holding the session file")
                .long_help(
                    "Directory holding the session file. Defaults to the platform config directory.",
                )
                .env("EXPENSE_TRACKER_SESSION_DIR")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long(ARG_TIMEOUT)
                .help("Request timeout in seconds (default: 10)")
                .env("EXPENSE_TRACKER_TIMEOUT")
                .global(true)
                .value_parser(clap::value_parser!(u64)),
        )
}
