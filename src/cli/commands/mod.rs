pub mod api;
pub mod auth;
pub mod budgets;
pub mod expenses;
pub mod logging;
pub mod profile;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    ColorChoice, Command,
};

pub const CMD_STATUS: &str = "status";
pub const CMD_DASHBOARD: &str = "dashboard";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("expense-tracker")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(auth::login())
        .subcommand(auth::register())
        .subcommand(auth::logout())
        .subcommand(Command::new(CMD_STATUS).about("Show whether you are signed in"))
        .subcommand(
            Command::new(CMD_DASHBOARD).about("Greeting and expense totals for the signed-in user"),
        )
        .subcommand(profile::command())
        .subcommand(expenses::command())
        .subcommand(budgets::command());

    let command = api::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::commands::{
        api::{ARG_API_URL, ARG_SESSION_DIR, ARG_TIMEOUT},
        auth::{ARG_CONFIRM_PASSWORD, ARG_EMAIL, ARG_PASSWORD, CMD_LOGIN, CMD_REGISTER},
        logging::{ARG_VERBOSITY, LEVEL_NAMES},
    };

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "expense-tracker");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            env!("CARGO_PKG_DESCRIPTION")
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_command_is_consistent() {
        new().debug_assert();
    }

    #[test]
    fn test_requires_subcommand() {
        let result = new().try_get_matches_from(vec!["expense-tracker"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_login_args() {
        temp_env::with_vars(
            [
                ("EXPENSE_TRACKER_EMAIL", None::<&str>),
                ("EXPENSE_TRACKER_PASSWORD", None::<&str>),
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "expense-tracker",
                    "login",
                    "--email",
                    "a@b.com",
                    "--password",
                    "x",
                ]);
                let (name, sub) = matches.subcommand().unwrap();
                assert_eq!(name, CMD_LOGIN);
                assert_eq!(
                    sub.get_one::<String>(ARG_EMAIL).map(String::as_str),
                    Some("a@b.com")
                );
                assert_eq!(
                    sub.get_one::<String>(ARG_PASSWORD).map(String::as_str),
                    Some("x")
                );
            },
        );
    }

    #[test]
    fn test_global_args_after_subcommand() {
        temp_env::with_vars(
            [
                ("EXPENSE_TRACKER_API_URL", None::<&str>),
                ("EXPENSE_TRACKER_TIMEOUT", None::<&str>),
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "expense-tracker",
                    "status",
                    "--api-url",
                    "https://api.example.com",
                    "--timeout",
                    "3",
                ]);
                let (_, sub) = matches.subcommand().unwrap();
                assert_eq!(
                    sub.get_one::<String>(ARG_API_URL).map(String::as_str),
                    Some("https://api.example.com")
                );
                assert_eq!(sub.get_one::<u64>(ARG_TIMEOUT).copied(), Some(3));
            },
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("EXPENSE_TRACKER_API_URL", Some("https://api.example.com")),
                ("EXPENSE_TRACKER_SESSION_DIR", Some("/tmp/expense-tracker")),
                ("EXPENSE_TRACKER_TIMEOUT", Some("7")),
                ("EXPENSE_TRACKER_PASSWORD", Some("from-env")),
                ("EXPENSE_TRACKER_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches =
                    new().get_matches_from(vec!["expense-tracker", "register", "-e", "a@b.com"]);
                assert_eq!(
                    matches.get_one::<String>(ARG_API_URL).map(String::as_str),
                    Some("https://api.example.com")
                );
                assert_eq!(
                    matches
                        .get_one::<String>(ARG_SESSION_DIR)
                        .map(String::as_str),
                    Some("/tmp/expense-tracker")
                );
                assert_eq!(matches.get_one::<u64>(ARG_TIMEOUT).copied(), Some(7));
                assert_eq!(matches.get_one::<u8>(ARG_VERBOSITY).copied(), Some(2));

                let (name, sub) = matches.subcommand().unwrap();
                assert_eq!(name, CMD_REGISTER);
                assert_eq!(
                    sub.get_one::<String>(ARG_PASSWORD).map(String::as_str),
                    Some("from-env")
                );
                assert!(sub.get_one::<String>(ARG_CONFIRM_PASSWORD).is_none());
            },
        );
    }

    #[test]
    fn test_default_api_url() {
        temp_env::with_vars([("EXPENSE_TRACKER_API_URL", None::<&str>)], || {
            let matches = new().get_matches_from(vec!["expense-tracker", "status"]);
            assert_eq!(
                matches.get_one::<String>(ARG_API_URL).map(String::as_str),
                Some("http://localhost:8080")
            );
        });
    }

    #[test]
    fn test_check_log_level_env() {
        for (index, &level) in LEVEL_NAMES.iter().enumerate() {
            temp_env::with_vars([("EXPENSE_TRACKER_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["expense-tracker", "status"]);
                assert_eq!(
                    matches.get_one::<u8>(ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..LEVEL_NAMES.len() {
            temp_env::with_vars([("EXPENSE_TRACKER_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["expense-tracker".to_string(), "status".to_string()];

                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);
                assert_eq!(
                    matches.get_one::<u8>(ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_expenses_add_parses_amount() {
        let matches = new().get_matches_from(vec![
            "expense-tracker",
            "expenses",
            "add",
            "--amount",
            "3.5",
            "--category",
            "food",
        ]);
        let (_, expenses) = matches.subcommand().unwrap();
        let (name, add) = expenses.subcommand().unwrap();
        assert_eq!(name, expenses::CMD_ADD);
        assert_eq!(add.get_one::<f64>(expenses::ARG_AMOUNT).copied(), Some(3.5));
    }

    #[test]
    fn test_expenses_update_takes_optional_fields() {
        let matches = new().get_matches_from(vec![
            "expense-tracker",
            "expenses",
            "update",
            "4",
            "--place",
            "market",
        ]);
        let (_, expenses) = matches.subcommand().unwrap();
        let (name, update) = expenses.subcommand().unwrap();
        assert_eq!(name, expenses::CMD_UPDATE);
        assert_eq!(update.get_one::<i64>(expenses::ARG_ID).copied(), Some(4));
        assert!(update.get_one::<f64>(expenses::ARG_AMOUNT).is_none());
    }

    #[test]
    fn test_budgets_show_requires_id() {
        let result = new().try_get_matches_from(vec!["expense-tracker", "budgets", "show"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_profile_delete_flag() {
        let matches = new().get_matches_from(vec!["expense-tracker", "profile", "delete", "-y"]);
        let (_, profile) = matches.subcommand().unwrap();
        let (name, delete) = profile.subcommand().unwrap();
        assert_eq!(name, profile::CMD_DELETE);
        assert!(delete.get_flag(profile::ARG_YES));
    }
}
