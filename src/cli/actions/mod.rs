pub mod budgets;
pub mod dashboard;
pub mod expenses;
pub mod login;
pub mod logout;
pub mod profile;
pub mod register;
pub mod status;

// Internal "interpreter" for `Action`.
// The match lives in `run` so this module only lists what the CLI can do.
mod run;

use crate::{cli::globals::GlobalArgs, client::ClientError};

#[derive(Debug)]
pub enum Action {
    Login(login::Args),
    Register(register::Args),
    Logout,
    Status,
    Dashboard,
    Profile(profile::Args),
    Expenses(expenses::Args),
    Budgets(budgets::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self, globals: &GlobalArgs) -> anyhow::Result<()> {
        run::execute(self, globals).await
    }
}

/// Turns a client error into the message shown on the terminal.
pub(crate) fn report(err: ClientError) -> anyhow::Error {
    anyhow::anyhow!(err.user_message())
}
