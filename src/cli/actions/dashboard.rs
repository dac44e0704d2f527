use crate::{
    cli::{actions::report, globals::GlobalArgs},
    client::{ApiClient, ClientError},
    features::expenses::{ExpenseSummary, ExpensesClient},
    session::{guards::require_authenticated, KeyValueStore},
};
use anyhow::Result;

/// # Errors
/// Returns an error if nobody is signed in or the expenses cannot be loaded.
pub async fn handle(globals: &GlobalArgs) -> Result<()> {
    let api = globals.api().map_err(report)?;
    let output = dashboard(api).await.map_err(report)?;
    print!("{output}");
    Ok(())
}

/// Greeting plus expense totals for the signed-in user.
///
/// # Errors
/// Returns [`ClientError::Unauthenticated`] before any request when no token is stored.
pub async fn dashboard<S: KeyValueStore>(api: ApiClient<S>) -> Result<String, ClientError> {
    require_authenticated(api.session())?;

    let greeting = greeting(&api.session().current_display_name());
    let expenses = ExpensesClient::new(api).list_expenses().await?;

    Ok(render(&greeting, &ExpenseSummary::from_expenses(&expenses)))
}

#[must_use]
pub fn greeting(display_name: &str) -> String {
    format!("Welcome, {display_name}!")
}

#[must_use]
pub fn render(greeting: &str, summary: &ExpenseSummary) -> String {
    let mut lines = vec![greeting.to_string()];

    if summary.count == 0 {
        lines.push("No expenses recorded yet.".to_string());
    } else {
        lines.push(format!(
            "{} expense(s), total {:.2}",
            summary.count, summary.total
        ));
        lines.extend(
            summary
                .by_category
                .iter()
                .map(|(category, amount)| format!("  {category:<20} {amount:>10.2}")),
        );
    }

    lines.iter().map(|line| format!("{line}\n")).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{
        client::ClientConfig,
        session::{AuthResponse, MemoryStore, SessionStore},
    };
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn api(server: &MockServer) -> ApiClient<MemoryStore> {
        let config = ClientConfig::new(Some(&server.uri()), Some(2), Some("/tmp")).unwrap();
        ApiClient::new(config, Arc::new(SessionStore::new(MemoryStore::new()))).unwrap()
    }

    #[test]
    fn greeting_uses_display_name() {
        assert_eq!(greeting("alice"), "Welcome, alice!");
        assert_eq!(greeting("User"), "Welcome, User!");
    }

    #[test]
    fn render_empty_summary() {
        let out = render("Welcome, User!", &ExpenseSummary::default());
        assert_eq!(out, "Welcome, User!\nNo expenses recorded yet.\n");
    }

    #[test]
    fn render_lists_each_category_on_its_own_line() {
        let summary = ExpenseSummary {
            count: 2,
            total: 3.0,
            by_category: [("food".to_string(), 1.0), ("travel".to_string(), 2.0)]
                .into_iter()
                .collect(),
        };
        assert_eq!(
            render("Welcome, alice!", &summary),
            "Welcome, alice!\n2 expense(s), total 3.00\n  food                       1.00\n  travel                     2.00\n"
        );
    }

    #[tokio::test]
    async fn dashboard_requires_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let err = dashboard(api(&server)).await.unwrap_err();
        assert!(matches!(err, ClientError::Unauthenticated));
    }

    #[tokio::test]
    async fn dashboard_summarizes_expenses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/expenses"))
            .and(header("Authorization", "Bearer T1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "amount": 10.0, "category": "Food"},
                {"id": 2, "amount": 2.5, "category": "food"},
                {"id": 3, "amount": 4.0}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let api = api(&server);
        api.session()
            .record_authentication(&AuthResponse::new("T1", Some("alice".to_string())))
            .unwrap();

        let out = dashboard(api).await.unwrap();
        assert!(out.starts_with("Welcome, alice!\n"));
        assert!(out.contains("3 expense(s), total 16.50"));
        assert!(out.contains("food"));
        assert!(out.contains("uncategorized"));
    }
}
