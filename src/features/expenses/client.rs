//! Client helpers for the `/expenses` endpoints. Requests are scoped to the
//! signed-in user by the server; nothing is cached or queued locally.

use crate::{
    client::{ApiClient, ClientError},
    features::{
        expenses::types::{Expense, ExpenseDraft, ExpenseUpdate},
        forms::FormErrors,
    },
    session::KeyValueStore,
};
use tracing::{info, instrument};
use url::Url;

pub const EXPENSES_PATH: &str = "/expenses";

#[derive(Clone, Debug)]
pub struct ExpensesClient<S> {
    api: ApiClient<S>,
}

impl<S: KeyValueStore> ExpensesClient<S> {
    pub fn new(api: ApiClient<S>) -> Self {
        Self { api }
    }

    /// # Errors
    /// Returns transport, HTTP or decoding errors.
    #[instrument(skip_all)]
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, ClientError> {
        self.api.get_json(EXPENSES_PATH).await
    }

    /// # Errors
    /// Returns [`ClientError::Validation`] for a blank category, or transport errors.
    #[instrument(skip(self))]
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Expense>, ClientError> {
        let category = category.trim();
        if category.is_empty() {
            let mut errors = FormErrors::new();
            errors.push("category", "required", "Category is required.");
            return Err(errors.into());
        }

        let path = encoded_path(&["expenses", "category", category])?;
        self.api.get_json(&path).await
    }

    /// # Errors
    /// Returns transport, HTTP or decoding errors.
    #[instrument(skip(self))]
    pub async fn get_expense(&self, id: i64) -> Result<Expense, ClientError> {
        self.api.get_json(&format!("{EXPENSES_PATH}/{id}")).await
    }

    /// # Errors
    /// Returns [`ClientError::Validation`] without a request for an invalid draft.
    #[instrument(skip_all, fields(amount = draft.amount))]
    pub async fn create_expense(&self, draft: &ExpenseDraft) -> Result<Expense, ClientError> {
        draft.validate()?;
        let created: Expense = self
            .api
            .post_json("expense create", EXPENSES_PATH, draft)
            .await?;
        info!(id = created.id, "expense created");
        Ok(created)
    }

    /// Changes only the fields present in `update`.
    /// # Errors
    /// Returns [`ClientError::Validation`] without a request for an invalid update,
    /// or transport, HTTP or decoding errors.
    #[instrument(skip(self, update))]
    pub async fn update_expense(
        &self,
        id: i64,
        update: &ExpenseUpdate,
    ) -> Result<Expense, ClientError> {
        update.validate()?;
        let updated: Expense = self
            .api
            .patch_json("expense update", &format!("{EXPENSES_PATH}/{id}"), update)
            .await?;
        info!(id = updated.id, "expense updated");
        Ok(updated)
    }

    /// # Errors
    /// Returns transport or HTTP errors.
    #[instrument(skip(self))]
    pub async fn delete_expense(&self, id: i64) -> Result<(), ClientError> {
        self.api
            .delete("expense delete", &format!("{EXPENSES_PATH}/{id}"))
            .await?;
        info!(id, "expense deleted");
        Ok(())
    }
}

/// Joins percent-encoded path segments into an absolute path.
fn encoded_path(segments: &[&str]) -> Result<String, ClientError> {
    let mut url = Url::parse("http://localhost/")
        .map_err(|err| ClientError::Config(format!("Failed to build path: {err}")))?;
    url.path_segments_mut()
        .map_err(|()| ClientError::Config("Failed to build path.".to_string()))?
        .clear()
        .extend(segments);
    Ok(url.path().to_string())
}
