use clap::{Arg, Command};

pub const CMD_EXPENSES: &str = "expenses";
pub const CMD_LIST: &str = "list";
pub const CMD_SHOW: &str = "show";
pub const CMD_ADD: &str = "add";
pub const CMD_UPDATE: &str = "update";
pub const CMD_DELETE: &str = "delete";

pub const ARG_ID: &str = "id";
pub const ARG_AMOUNT: &str = "amount";
pub const ARG_DESCRIPTION: &str = "description";
pub const ARG_PLACE: &str = "place";
pub const ARG_CATEGORY: &str = "category";
pub const ARG_SOURCE: &str = "source";
pub const ARG_TIMESTAMP: &str = "timestamp";
pub const ARG_BUDGET_ID: &str = "budget-id";

fn id_arg() -> Arg {
    Arg::new(ARG_ID)
        .help("Expense id")
        .required(true)
        .value_parser(clap::value_parser!(i64))
}

fn amount_arg() -> Arg {
    Arg::new(ARG_AMOUNT)
        .short('a')
        .long(ARG_AMOUNT)
        .help("Amount spent")
        .allow_negative_numbers(true)
        .value_parser(clap::value_parser!(f64))
}

/// Fields shared by `add` and `update`.
fn detail_args(command: Command) -> Command {
    command
        .arg(Arg::new(ARG_DESCRIPTION).short('d').long(ARG_DESCRIPTION))
        .arg(Arg::new(ARG_PLACE).long(ARG_PLACE))
        .arg(Arg::new(ARG_CATEGORY).short('c').long(ARG_CATEGORY))
        .arg(Arg::new(ARG_SOURCE).long(ARG_SOURCE).help("Payment source"))
        .arg(
            Arg::new(ARG_TIMESTAMP)
                .long(ARG_TIMESTAMP)
                .help("RFC 3339 timestamp, defaults to now on the server"),
        )
}

#[must_use]
pub fn command() -> Command {
    Command::new(CMD_EXPENSES)
        .about("List and record expenses")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(CMD_LIST).about("List your expenses").arg(
                Arg::new(ARG_CATEGORY)
                    .short('c')
                    .long(ARG_CATEGORY)
                    .help("Only show this category"),
            ),
        )
        .subcommand(Command::new(CMD_SHOW).about("Show one expense").arg(id_arg()))
        .subcommand(
            detail_args(
                Command::new(CMD_ADD)
                    .about("Record an expense")
                    .arg(amount_arg().required(true)),
            )
            .arg(
                Arg::new(ARG_BUDGET_ID)
                    .long(ARG_BUDGET_ID)
                    .value_parser(clap::value_parser!(i64)),
            ),
        )
        .subcommand(detail_args(
            Command::new(CMD_UPDATE)
                .about("Change fields of an expense; omitted fields keep their value")
                .arg(id_arg())
                .arg(amount_arg()),
        ))
        .subcommand(Command::new(CMD_DELETE).about("Delete an expense").arg(id_arg()))
}
