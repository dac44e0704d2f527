pub mod auth;
pub mod budgets;
pub mod expenses;
pub mod forms;
pub mod profile;
