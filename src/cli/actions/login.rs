use crate::{
    cli::{actions::report, globals::GlobalArgs},
    client::{ApiClient, ClientError},
    features::auth::{submit_login, AuthClient, LoginForm},
    session::{guards::redirect_if_authenticated, KeyValueStore},
};
use anyhow::Result;

#[derive(Debug)]
pub struct Args {
    pub form: LoginForm,
}

/// # Errors
/// Returns an error if the form is invalid or the API rejects the credentials.
pub async fn handle(args: Args, globals: &GlobalArgs) -> Result<()> {
    let api = globals.api().map_err(report)?;
    let message = login(&args.form, api).await.map_err(report)?;
    println!("{message}");
    Ok(())
}

/// Signs in and returns the confirmation line.
///
/// # Errors
/// Returns validation, transport or HTTP errors.
pub async fn login<S: KeyValueStore>(
    form: &LoginForm,
    api: ApiClient<S>,
) -> Result<String, ClientError> {
    if let Some(notice) = redirect_if_authenticated(api.session()) {
        eprintln!("{notice}");
    }

    let client = AuthClient::new(api);
    submit_login(&client, form).await?;

    Ok(format!(
        "Signed in as {}.",
        client.api().session().current_display_name()
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{
        client::ClientConfig,
        session::{MemoryStore, SessionStore},
    };
    use secrecy::SecretString;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn api(server: &MockServer) -> ApiClient<MemoryStore> {
        let config = ClientConfig::new(Some(&server.uri()), Some(2), Some("/tmp")).unwrap();
        ApiClient::new(config, Arc::new(SessionStore::new(MemoryStore::new()))).unwrap()
    }

    #[tokio::test]
    async fn login_reports_display_name() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({"email": "a@b.com", "password": "x"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"token": "T1", "displayName": "alice"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let form = LoginForm {
            email: "a@b.com".to_string(),
            password: "x".into(),
        };
        let message = login(&form, api(&server)).await.unwrap();
        assert_eq!(message, "Signed in as alice.");
    }

    #[tokio::test]
    async fn invalid_form_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let form = LoginForm {
            email: "not-an-email".to_string(),
            password: SecretString::default(),
        };
        let err = login(&form, api(&server)).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }
}
