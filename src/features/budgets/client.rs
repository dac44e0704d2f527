//! Read-only access to `/budgets`, so `--budget-id` values can be looked up.

use crate::{
    client::{ApiClient, ClientError},
    features::budgets::types::Budget,
    session::KeyValueStore,
};
use tracing::instrument;

pub const BUDGETS_PATH: &str = "/budgets";

#[derive(Clone, Debug)]
pub struct BudgetsClient<S> {
    api: ApiClient<S>,
}

impl<S: KeyValueStore> BudgetsClient<S> {
    pub fn new(api: ApiClient<S>) -> Self {
        Self { api }
    }

    /// # Errors
    /// Returns transport, HTTP or decoding errors.
    #[instrument(skip_all)]
    pub async fn list_budgets(&self) -> Result<Vec<Budget>, ClientError> {
        self.api.get_json(BUDGETS_PATH).await
    }

    /// # Errors
    /// Returns transport, HTTP or decoding errors.
    #[instrument(skip(self))]
    pub async fn get_budget(&self, id: i64) -> Result<Budget, ClientError> {
        self.api.get_json(&format!("{BUDGETS_PATH}/{id}")).await
    }
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
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> BudgetsClient<MemoryStore> {
        let config = ClientConfig::new(Some(&server.uri()), Some(2), Some("/tmp/unused")).unwrap();
        let session = Arc::new(SessionStore::new(MemoryStore::new()));
        session
            .record_authentication(&AuthResponse::new("T1", None))
            .unwrap();
        BudgetsClient::new(ApiClient::new(config, session).unwrap())
    }

    #[tokio::test]
    async fn list_budgets_sends_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(BUDGETS_PATH))
            .and(header("Authorization", "Bearer T1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "amount": 200.0, "name": "Food"},
                {"id": 2, "amount": 50.0}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let budgets = client(&server).list_budgets().await.unwrap();
        assert_eq!(budgets.len(), 2);
        assert_eq!(budgets[1].name, None);
    }

    #[tokio::test]
    async fn get_budget_maps_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/budgets/9"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let err = client(&server).get_budget(9).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
