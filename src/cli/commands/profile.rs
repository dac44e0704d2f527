use clap::{Arg, ArgAction, Command};

pub const CMD_PROFILE: &str = "profile";
pub const CMD_SHOW: &str = "show";
pub const CMD_UPDATE: &str = "update";
pub const CMD_DELETE: &str = "delete";

pub const ARG_USERNAME: &str = "username";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_YES: &str = "yes";

#[must_use]
pub fn command() -> Command {
    Command::new(CMD_PROFILE)
        .about("View or edit your profile")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new(CMD_SHOW).about("Show your profile"))
        .subcommand(
            Command::new(CMD_UPDATE)
                .about("Update username, email or password")
                .arg(Arg::new(ARG_USERNAME).long(ARG_USERNAME).help("New username"))
                .arg(Arg::new(ARG_EMAIL).long(ARG_EMAIL).help("New email address"))
                .arg(
                    Arg::new(ARG_PASSWORD)
                        .long(ARG_PASSWORD)
                        .help("New password; leave empty to keep the current one"),
                ),
        )
        .subcommand(
            Command::new(CMD_DELETE)
                .about("Delete your account and sign out")
                .arg(
                    Arg::new(ARG_YES)
                        .long(ARG_YES)
                        .short('y')
                        .help("Confirm account deletion")
                        .action(ArgAction::SetTrue),
                ),
        )
}
