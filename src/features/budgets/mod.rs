pub mod client;
pub mod types;

pub use self::client::BudgetsClient;
pub use self::types::Budget;
