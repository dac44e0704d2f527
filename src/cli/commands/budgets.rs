use clap::{Arg, Command};

pub const CMD_BUDGETS: &str = "budgets";
pub const CMD_LIST: &str = "list";
pub const CMD_SHOW: &str = "show";

pub const ARG_ID: &str = "id";

#[must_use]
pub fn command() -> Command {
    Command::new(CMD_BUDGETS)
        .about("Look up budgets to use with `expenses add --budget-id`")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new(CMD_LIST).about("List your budgets"))
        .subcommand(
            Command::new(CMD_SHOW).about("Show one budget").arg(
                Arg::new(ARG_ID)
                    .help("Budget id")
                    .required(true)
                    .value_parser(clap::value_parser!(i64)),
            ),
        )
}
