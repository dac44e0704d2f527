use crate::{
    cli::{actions::report, globals::GlobalArgs},
    client::{ApiClient, ClientError},
    features::budgets::{Budget, BudgetsClient},
    session::{guards::require_authenticated, KeyValueStore},
};
use anyhow::Result;

#[derive(Debug)]
pub enum Args {
    List,
    Show { id: i64 },
}

/// # Errors
/// Returns an error if nobody is signed in or the API call fails.
pub async fn handle(args: Args, globals: &GlobalArgs) -> Result<()> {
    let api = globals.api().map_err(report)?;
    let output = run(args, api).await.map_err(report)?;
    print!("{output}");
    Ok(())
}

/// # Errors
/// Returns [`ClientError::Unauthenticated`] before any request when no token is stored.
pub async fn run<S: KeyValueStore>(args: Args, api: ApiClient<S>) -> Result<String, ClientError> {
    require_authenticated(api.session())?;
    let client = BudgetsClient::new(api);

    Ok(match args {
        Args::List => render(&client.list_budgets().await?),
        Args::Show { id } => render(&[client.get_budget(id).await?]),
    })
}

#[must_use]
pub fn render(budgets: &[Budget]) -> String {
    if budgets.is_empty() {
        return "No budgets found.\n".to_string();
    }

    budgets
        .iter()
        .map(|budget| {
            let name = budget.name.as_deref().unwrap_or("(unnamed)");
            let period = budget
                .time_period
                .as_deref()
                .map(|period| format!("  {}", period.to_lowercase()))
                .unwrap_or_default();
            format!("{:>6}  {:>10.2}  {name}{period}\n", budget.id, budget.amount)
        })
        .collect()
}
