use crate::cli::{
    actions::{budgets, dashboard, expenses, login, logout, profile, register, status, Action},
    globals::GlobalArgs,
};
use anyhow::Result;

/// Execute the given action.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action, globals: &GlobalArgs) -> Result<()> {
    match action {
        Action::Login(args) => login::handle(args, globals).await?,
        Action::Register(args) => register::handle(args, globals).await?,
        Action::Logout => logout::handle(globals)?,
        Action::Status => status::handle(globals)?,
        Action::Dashboard => dashboard::handle(globals).await?,
        Action::Profile(args) => profile::handle(args, globals).await?,
        Action::Expenses(args) => expenses::handle(args, globals).await?,
        Action::Budgets(args) => budgets::handle(args, globals).await?,
    }

    Ok(())
}
