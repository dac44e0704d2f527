use crate::{
    cli::{
        actions::{budgets, expenses, login, profile, register, Action},
        commands::{
            auth::{
                ARG_CONFIRM_PASSWORD, ARG_EMAIL, ARG_FIRST_NAME, ARG_LAST_NAME, ARG_PASSWORD,
                ARG_USERNAME, CMD_LOGIN, CMD_LOGOUT, CMD_REGISTER,
            },
            budgets as budgets_cmd, expenses as expenses_cmd, profile as profile_cmd,
            CMD_DASHBOARD, CMD_STATUS,
        },
    },
    features::{
        auth::{LoginForm, RegisterForm},
        expenses::{ExpenseDraft, ExpenseUpdate},
        profile::ProfileUpdate,
    },
};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;

fn string(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.get_one::<String>(id).cloned()
}

fn secret(matches: &ArgMatches, id: &str) -> SecretString {
    string(matches, id).map(SecretString::from).unwrap_or_default()
}

/// Map parsed arguments to the action to run.
/// # Errors
/// Returns an error if the subcommand is unknown or a required argument is missing.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some((CMD_LOGIN, sub)) => Ok(Action::Login(login::Args {
            form: LoginForm {
                email: string(sub, ARG_EMAIL).unwrap_or_default(),
                password: secret(sub, ARG_PASSWORD),
            },
        })),
        Some((CMD_REGISTER, sub)) => Ok(Action::Register(register::Args {
            form: RegisterForm {
                email: string(sub, ARG_EMAIL).unwrap_or_default(),
                username: string(sub, ARG_USERNAME).unwrap_or_default(),
                password: secret(sub, ARG_PASSWORD),
                confirm_password: secret(sub, ARG_CONFIRM_PASSWORD),
                first_name: string(sub, ARG_FIRST_NAME),
                last_name: string(sub, ARG_LAST_NAME),
            },
        })),
        Some((CMD_LOGOUT, _)) => Ok(Action::Logout),
        Some((CMD_STATUS, _)) => Ok(Action::Status),
        Some((CMD_DASHBOARD, _)) => Ok(Action::Dashboard),
        Some((profile_cmd::CMD_PROFILE, sub)) => profile_handler(sub).map(Action::Profile),
        Some((expenses_cmd::CMD_EXPENSES, sub)) => expenses_handler(sub).map(Action::Expenses),
        Some((budgets_cmd::CMD_BUDGETS, sub)) => budgets_handler(sub).map(Action::Budgets),
        Some((name, _)) => Err(anyhow!("unknown command: {name}")),
        None => Err(anyhow!("no command given, see --help")),
    }
}

fn profile_handler(matches: &ArgMatches) -> Result<profile::Args> {
    match matches.subcommand() {
        Some((profile_cmd::CMD_SHOW, _)) => Ok(profile::Args::Show),
        Some((profile_cmd::CMD_UPDATE, sub)) => Ok(profile::Args::Update(ProfileUpdate {
            username: string(sub, profile_cmd::ARG_USERNAME),
            email: string(sub, profile_cmd::ARG_EMAIL),
            password: string(sub, profile_cmd::ARG_PASSWORD).map(SecretString::from),
        })),
        Some((profile_cmd::CMD_DELETE, sub)) => Ok(profile::Args::Delete {
            confirmed: sub.get_flag(profile_cmd::ARG_YES),
        }),
        _ => Err(anyhow!("unknown profile command, see `profile --help`")),
    }
}

fn expenses_handler(matches: &ArgMatches) -> Result<expenses::Args> {
    let id = |sub: &ArgMatches| {
        sub.get_one::<i64>(expenses_cmd::ARG_ID)
            .copied()
            .context("missing required argument: <id>")
    };

    match matches.subcommand() {
        Some((expenses_cmd::CMD_LIST, sub)) => Ok(expenses::Args::List {
            category: string(sub, expenses_cmd::ARG_CATEGORY),
        }),
        Some((expenses_cmd::CMD_SHOW, sub)) => Ok(expenses::Args::Show { id: id(sub)? }),
        Some((expenses_cmd::CMD_DELETE, sub)) => Ok(expenses::Args::Delete { id: id(sub)? }),
        Some((expenses_cmd::CMD_ADD, sub)) => Ok(expenses::Args::Add(ExpenseDraft {
            amount: sub
                .get_one::<f64>(expenses_cmd::ARG_AMOUNT)
                .copied()
                .context("missing required argument: --amount")?,
            description: string(sub, expenses_cmd::ARG_DESCRIPTION),
            place: string(sub, expenses_cmd::ARG_PLACE),
            category: string(sub, expenses_cmd::ARG_CATEGORY),
            source: string(sub, expenses_cmd::ARG_SOURCE),
            timestamp: string(sub, expenses_cmd::ARG_TIMESTAMP),
            budget_id: sub.get_one::<i64>(expenses_cmd::ARG_BUDGET_ID).copied(),
        })),
        Some((expenses_cmd::CMD_UPDATE, sub)) => Ok(expenses::Args::Update {
            id: id(sub)?,
            update: ExpenseUpdate {
                amount: sub.get_one::<f64>(expenses_cmd::ARG_AMOUNT).copied(),
                description: string(sub, expenses_cmd::ARG_DESCRIPTION),
                place: string(sub, expenses_cmd::ARG_PLACE),
                category: string(sub, expenses_cmd::ARG_CATEGORY),
                source: string(sub, expenses_cmd::ARG_SOURCE),
                timestamp: string(sub, expenses_cmd::ARG_TIMESTAMP),
            },
        }),
        _ => Err(anyhow!("unknown expenses command, see `expenses --help`")),
    }
}

fn budgets_handler(matches: &ArgMatches) -> Result<budgets::Args> {
    match matches.subcommand() {
        Some((budgets_cmd::CMD_LIST, _)) => Ok(budgets::Args::List),
        Some((budgets_cmd::CMD_SHOW, sub)) => Ok(budgets::Args::Show {
            id: sub
                .get_one::<i64>(budgets_cmd::ARG_ID)
                .copied()
                .context("missing required argument: <id>")?,
        }),
        _ => Err(anyhow!("unknown budgets command, see `budgets --help`")),
    }
}
