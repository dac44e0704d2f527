use crate::{
    cli::{actions::report, globals::GlobalArgs},
    client::{ApiClient, ClientError},
    features::expenses::{Expense, ExpenseDraft, ExpenseUpdate, ExpensesClient},
    session::{guards::require_authenticated, KeyValueStore},
};
use anyhow::Result;

#[derive(Debug)]
pub enum Args {
    List { category: Option<String> },
    Show { id: i64 },
    Add(ExpenseDraft),
    Update { id: i64, update: ExpenseUpdate },
    Delete { id: i64 },
}

/// # Errors
/// Returns an error if nobody is signed in or the API call fails.
pub async fn handle(args: Args, globals: &GlobalArgs) -> Result<()> {
    let api = globals.api().map_err(report)?;
    let output = run(args, api).await.map_err(report)?;
    print!("{output}");
    Ok(())
}

/// Runs an expenses subcommand and returns what to print.
///
/// # Errors
/// Returns [`ClientError::Unauthenticated`] before any request when no token is stored.
pub async fn run<S: KeyValueStore>(args: Args, api: ApiClient<S>) -> Result<String, ClientError> {
    require_authenticated(api.session())?;
    let client = ExpensesClient::new(api);

    let output = match args {
        Args::List { category: None } => render_list(&client.list_expenses().await?),
        Args::List {
            category: Some(category),
        } => render_list(&client.list_by_category(&category).await?),
        Args::Show { id } => render_list(&[client.get_expense(id).await?]),
        Args::Add(draft) => {
            let expense = client.create_expense(&draft).await?;
            format!("Created expense {}.\n", expense.id)
        }
        Args::Update { id, update } => {
            let expense = client.update_expense(id, &update).await?;
            format!("Updated expense {}.\n", expense.id)
        }
        Args::Delete { id } => {
            client.delete_expense(id).await?;
            format!("Deleted expense {id}.\n")
        }
    };

    Ok(output)
}

#[must_use]
pub fn render_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    expenses.iter().map(render_row).collect()
}

fn render_row(expense: &Expense) -> String {
    let mut row = format!("{:>6}  {:>10.2}", expense.id, expense.amount);
    if let Some(category) = &expense.category {
        row.push_str(&format!("  [{category}]"));
    }
    if let Some(description) = &expense.description {
        row.push_str("  ");
        row.push_str(description);
    }
    if let Some(place) = &expense.place {
        row.push_str(" @ ");
        row.push_str(place);
    }
    if let Some(date_time) = &expense.date_time {
        row.push_str(&format!("  ({date_time})"));
    }
    row.push('\n');
    row
}
