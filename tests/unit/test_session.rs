use crate::common::PATH;
use lms_client::prelude::*;
use mockito::{Matcher, Server};

fn file_client(server: &mockito::ServerGuard, path: &std::path::Path) -> Client {
    let config = Config::with_base_url(format!("{}{}", server.url(), PATH)).with_session_file(path);
    Client::new(config).unwrap()
}

#[tokio::test]
async fn login_survives_restart_and_logout_forgets_it() {
    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");

    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", PATH)
        .match_query(Matcher::UrlEncoded("action".into(), "login".into()))
        .with_status(200)
        .with_body(
            r#"{"success":true,"token":"persisted-token",
                "user":{"id":"1","name":"Ada","email":"ada@example.com","role":"student"}}"#,
        )
        .create_async()
        .await;

    let first = file_client(&server, &session_file);
    first.login("ada@example.com", "secret").await.unwrap();
    login.assert_async().await;
    assert!(session_file.exists());
    drop(first);

    let profile = server
        .mock("GET", PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("action".into(), "get_profile".into()),
            Matcher::UrlEncoded("token".into(), "persisted-token".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"id":"1","name":"Ada","email":"ada@example.com"}"#)
        .create_async()
        .await;
    let logout = server
        .mock("POST", PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("action".into(), "logout".into()),
            Matcher::UrlEncoded("token".into(), "persisted-token".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"success":true}"#)
        .create_async()
        .await;

    let second = file_client(&server, &session_file);
    assert!(second.auth().is_authenticated().await);
    assert_eq!(
        second.auth().current_user().await.map(|u| u.name),
        Some("Ada".to_string())
    );
    second.get_profile().await.unwrap();
    second.logout().await.unwrap();
    profile.assert_async().await;
    logout.assert_async().await;

    assert!(!session_file.exists());
    let third = file_client(&server, &session_file);
    assert!(!third.auth().is_authenticated().await);
}

#[tokio::test]
async fn unauthorized_removes_session_file() {
    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");
    FileSessionStore::new(&session_file)
        .save(&StoredSession::new("stale", None))
        .unwrap();

    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PATH)
        .match_query(Matcher::UrlEncoded("token".into(), "stale".into()))
        .with_status(401)
        .with_body(r#"{"error":"invalid token"}"#)
        .create_async()
        .await;

    let client = file_client(&server, &session_file);
    let result = client.get_dashboard_stats().await;
    mock.assert_async().await;

    assert!(matches!(result, Err(AppError::Unauthorized)));
    assert!(!session_file.exists());
    assert!(!client.auth().is_authenticated().await);
}

#[tokio::test]
async fn corrupt_session_file_starts_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");
    std::fs::write(&session_file, "not json").unwrap();

    let server = Server::new_async().await;
    let client = file_client(&server, &session_file);
    assert!(!client.auth().is_authenticated().await);
    assert!(matches!(
        client.get_enrolled_courses().await,
        Err(AppError::NotAuthenticated)
    ));
}
