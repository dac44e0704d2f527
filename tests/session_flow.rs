#![allow(clippy::unwrap_used, clippy::expect_used)]

use expense_tracker::{
    client::{ApiClient, ClientConfig, ClientError},
    features::{
        auth::{submit_register, AuthClient, LoginRequest, RegisterForm},
        profile::ProfileClient,
    },
    session::{AuthResponse, FileStore, SessionStore},
};
use secrecy::ExposeSecret;
use serde_json::json;
use std::{path::Path, sync::Arc};
use tempfile::TempDir;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

// Each call opens the session file again, like a new CLI invocation would.
fn api(server: &MockServer, dir: &Path) -> ApiClient<FileStore> {
    let config = ClientConfig::new(Some(&server.uri()), Some(2), dir.to_str()).unwrap();
    let session = SessionStore::new(FileStore::open(dir).unwrap());
    ApiClient::new(config, Arc::new(session)).unwrap()
}

#[tokio::test]
async fn test_login_without_display_name_keeps_previous_name() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    api(&server, dir.path())
        .session()
        .record_authentication(&AuthResponse::new("T0", Some("alice".to_string())))
        .unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "T1"})))
        .expect(1)
        .mount(&server)
        .await;

    let auth = AuthClient::new(api(&server, dir.path()));
    auth.login(&LoginRequest {
        email: "a@b.com".to_string(),
        password: "x".into(),
    })
    .await
    .unwrap();

    let reopened = api(&server, dir.path());
    let token = reopened.session().current_token().unwrap();
    assert_eq!(token.expose_secret(), "T1");
    assert_eq!(reopened.session().current_display_name(), "alice");
}

#[tokio::test]
async fn test_register_password_mismatch_never_calls_api() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "T2"})))
        .expect(0)
        .mount(&server)
        .await;

    let form = RegisterForm {
        email: "a@b.com".to_string(),
        username: "alice".to_string(),
        password: "secret1".into(),
        confirm_password: "secret2".into(),
        ..RegisterForm::default()
    };
    assert!(!form.is_valid());

    let auth = AuthClient::new(api(&server, dir.path()));
    let err = submit_register(&auth, &form).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert!(!auth.api().session().is_authenticated());
}

#[tokio::test]
async fn test_delete_profile_then_clear_session_signs_out() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    api(&server, dir.path())
        .session()
        .record_authentication(&AuthResponse::new("T1", Some("alice".to_string())))
        .unwrap();

    Mock::given(method("DELETE"))
        .and(path("/users/profile"))
        .and(header("Authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let profile = ProfileClient::new(api(&server, dir.path()));
    profile.delete_profile().await.unwrap();
    profile.api().session().clear_session().unwrap();

    let reopened = api(&server, dir.path());
    assert!(!reopened.session().is_authenticated());
    assert_eq!(reopened.session().current_display_name(), "User");
}

#[tokio::test]
async fn test_rejected_login_keeps_existing_session() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    api(&server, dir.path())
        .session()
        .record_authentication(&AuthResponse::new("T0", None))
        .unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&server)
        .await;

    let auth = AuthClient::new(api(&server, dir.path()));
    let err = auth
        .login(&LoginRequest {
            email: "a@b.com".to_string(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));

    let reopened = api(&server, dir.path());
    assert_eq!(
        reopened.session().current_token().unwrap().expose_secret(),
        "T0"
    );
}

#[tokio::test]
async fn test_corrupt_session_file_allows_logout_and_login() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    std::fs::write(store.path(), "{truncated").unwrap();

    let client = api(&server, dir.path());
    assert!(!client.session().is_authenticated());

    AuthClient::new(client.clone()).logout().unwrap();
    assert!(!store.path().exists());

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"token": "T1", "displayName": "alice"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    std::fs::write(store.path(), "{truncated").unwrap();
    AuthClient::new(client)
        .login(&LoginRequest {
            email: "a@b.com".to_string(),
            password: "x".into(),
        })
        .await
        .unwrap();

    let reopened = api(&server, dir.path());
    assert!(reopened.session().is_authenticated());
    assert_eq!(reopened.session().current_display_name(), "alice");
}
