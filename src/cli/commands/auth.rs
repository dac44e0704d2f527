use clap::{Arg, Command};

pub const CMD_LOGIN: &str = "login";
pub const CMD_REGISTER: &str = "register";
pub const CMD_LOGOUT: &str = "logout";

pub const ARG_EMAIL: &str = "email";
pub const ARG_USERNAME: &str = "username";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";
pub const ARG_FIRST_NAME: &str = "first-name";
pub const ARG_LAST_NAME: &str = "last-name";

// Missing values are reported by form validation, not by clap.
fn email_arg() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long(ARG_EMAIL)
        .help("Account email address")
        .env("EXPENSE_TRACKER_EMAIL")
}

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .short('p')
        .long(ARG_PASSWORD)
        .help("Account password")
        .env("EXPENSE_TRACKER_PASSWORD")
        .hide_env_values(true)
}

#[must_use]
pub fn login() -> Command {
    Command::new(CMD_LOGIN)
        .about("Sign in and store the session")
        .arg(email_arg())
        .arg(password_arg())
}

#[must_use]
pub fn register() -> Command {
    Command::new(CMD_REGISTER)
        .about("Create an account and store the session")
        .arg(email_arg())
        .arg(
            Arg::new(ARG_USERNAME)
                .short('u')
                .long(ARG_USERNAME)
                .help("Username"),
        )
        .arg(password_arg())
        .arg(
            Arg::new(ARG_CONFIRM_PASSWORD)
                .long(ARG_CONFIRM_PASSWORD)
                .help("Repeat the password"),
        )
        .arg(
            Arg::new(ARG_FIRST_NAME)
                .long(ARG_FIRST_NAME)
                .help("First name (optional)"),
        )
        .arg(
            Arg::new(ARG_LAST_NAME)
                .long(ARG_LAST_NAME)
                .help("Last name (optional)"),
        )
}

#[must_use]
pub fn logout() -> Command {
    Command::new(CMD_LOGOUT).about("Forget the stored session")
}
