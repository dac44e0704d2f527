pub mod client;
pub mod types;

pub use self::client::ExpensesClient;
pub use self::types::{Expense, ExpenseDraft, ExpenseSummary, ExpenseUpdate};
