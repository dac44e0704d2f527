//! Types for the `/expenses` endpoints.

use crate::features::forms::FormErrors;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const UNCATEGORIZED: &str = "uncategorized";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub budget_id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Payload for creating an expense. The owner is taken from the token server-side.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// RFC 3339 timestamp; the server uses "now" when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_id: Option<i64>,
}

impl ExpenseDraft {
    /// # Errors
    /// Returns the failing fields.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        if !self.amount.is_finite() || self.amount <= 0.0 {
            errors.push("amount", "min", "Amount must be a positive number.");
        }
        if self
            .category
            .as_deref()
            .is_some_and(|category| category.trim().is_empty())
        {
            errors.push("category", "required", "Category cannot be blank.");
        }
        errors.into_result(())
    }
}

/// Partial update; the server keeps every field that is absent here.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ExpenseUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.description.is_none()
            && self.place.is_none()
            && self.category.is_none()
            && self.source.is_none()
            && self.timestamp.is_none()
    }

    /// # Errors
    /// Returns the failing fields; an update that changes nothing is rejected too.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        if self.is_empty() {
            errors.push("update", "required", "Nothing to update.");
        }
        if self
            .amount
            .is_some_and(|amount| !amount.is_finite() || amount <= 0.0)
        {
            errors.push("amount", "min", "Amount must be a positive number.");
        }
        if self
            .category
            .as_deref()
            .is_some_and(|category| category.trim().is_empty())
        {
            errors.push("category", "required", "Category cannot be blank.");
        }
        errors.into_result(())
    }
}

/// Totals shown on the dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseSummary {
    pub count: usize,
    pub total: f64,
    pub by_category: BTreeMap<String, f64>,
}

impl ExpenseSummary {
    #[must_use]
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut summary = Self::default();
        for expense in expenses {
            summary.count += 1;
            summary.total += expense.amount;

            let category = expense
                .category
                .as_deref()
                .map(str::trim)
                .filter(|category| !category.is_empty())
                .unwrap_or(UNCATEGORIZED)
                .to_lowercase();
            *summary.by_category.entry(category).or_insert(0.0) += expense.amount;
        }
        summary
    }
}
