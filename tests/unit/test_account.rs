use crate::common::{OK, PATH, TOKEN, authed_query, client_for, logged_in_client};
use lms_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};

#[tokio::test]
async fn login_caches_token_and_normalizes_avatar() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_query(Matcher::Regex("^action=login$".into()))
        .match_body(Matcher::Json(
            json!({"email": "ada@example.com", "password": "secret"}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"success":true,"token":"abc123",
                "user":{"id":"5","name":"Ada","email":"ada@example.com","role":"student",
                        "avatar":"http://localhost/uploads/avatars/5.png"}}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client.login("ada@example.com", "secret").await.unwrap();
    mock.assert_async().await;

    assert!(response.success);
    let expected_avatar = format!("{}/uploads/avatars/5.png", server.url());
    let user = response.user.unwrap();
    assert_eq!(user.id, 5);
    assert_eq!(user.avatar.as_deref(), Some(expected_avatar.as_str()));

    assert_eq!(client.auth().token().await.as_deref(), Some("abc123"));
    let cached = client.auth().current_user().await.unwrap();
    assert_eq!(cached.avatar.as_deref(), Some(expected_avatar.as_str()));
}

#[tokio::test]
async fn login_without_token_leaves_session_empty() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_query(Matcher::UrlEncoded("action".into(), "login".into()))
        .with_status(200)
        .with_body(r#"{"success":false,"message":"Invalid credentials"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client.login("ada@example.com", "wrong").await.unwrap();
    mock.assert_async().await;

    assert!(!response.success);
    assert_eq!(response.message.as_deref(), Some("Invalid credentials"));
    assert!(!client.auth().is_authenticated().await);
}

#[tokio::test]
async fn authenticated_call_without_token_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PATH)
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.get_profile().await.unwrap_err();
    assert!(matches!(err, AppError::NotAuthenticated));
    mock.assert_async().await;
}

#[tokio::test]
async fn get_profile_sends_token_and_remembers_user() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PATH)
        .match_query(authed_query(&[("action", "get_profile")]))
        .with_status(200)
        .with_body(r#"{"id":5,"name":"Ada","email":"ada@example.com","avatar":"uploads/a.png"}"#)
        .create_async()
        .await;

    let client = logged_in_client(&server).await;
    let user = client.get_profile().await.unwrap();
    mock.assert_async().await;

    let expected = format!("{}/uploads/a.png", server.url());
    assert_eq!(user.avatar.as_deref(), Some(expected.as_str()));
    assert_eq!(client.auth().current_user().await, Some(user));
}

#[tokio::test]
async fn update_profile_sends_only_set_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_query(authed_query(&[("action", "update_profile")]))
        .match_body(Matcher::Json(json!({"name": "Ada L.", "bio": "Maths"})))
        .with_status(200)
        .with_body(r#"{"id":5,"name":"Ada L.","email":"ada@example.com","bio":"Maths"}"#)
        .create_async()
        .await;

    let client = logged_in_client(&server).await;
    let request = UpdateProfileRequest::default()
        .with_name("Ada L.")
        .with_bio("Maths");
    let user = client.update_profile(&request).await.unwrap();
    mock.assert_async().await;
    assert_eq!(user.name, "Ada L.");
}

#[tokio::test]
async fn upload_avatar_is_multipart_and_normalized() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_query(authed_query(&[("action", "upload_avatar")]))
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".into()),
        )
        .match_body(Matcher::Regex(r#"name="avatar"; filename="me.png""#.into()))
        .with_status(200)
        .with_body(r#"{"success":true,"avatar":"http://10.0.0.4/uploads/me.png"}"#)
        .create_async()
        .await;

    let client = logged_in_client(&server).await;
    let response = client
        .upload_avatar(FileUpload::new("me.png", b"PNGDATA".to_vec()))
        .await
        .unwrap();
    mock.assert_async().await;

    let expected = format!("{}/uploads/me.png", server.url());
    assert_eq!(response.url.as_deref(), Some(expected.as_str()));
}

#[tokio::test]
async fn logout_clears_token_even_when_backend_fails() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_query(authed_query(&[("action", "logout")]))
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = logged_in_client(&server).await;
    let err = client.logout().await.unwrap_err();
    mock.assert_async().await;

    match err {
        AppError::Api { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(client.auth().token().await.is_none());
}

#[tokio::test]
async fn unauthorized_response_clears_session_and_fires_hook() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PATH)
        .match_query(authed_query(&[("action", "get_profile")]))
        .with_status(401)
        .with_body(r#"{"success":false,"message":"Invalid token"}"#)
        .create_async()
        .await;

    let client = logged_in_client(&server).await;
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    client
        .on_unauthorized(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }))
        .await;

    let err = client.get_profile().await.unwrap_err();
    mock.assert_async().await;

    assert!(matches!(err, AppError::Unauthorized));
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert!(!client.auth().is_authenticated().await);

    // the next authenticated call is rejected locally
    assert!(matches!(
        client.get_profile().await,
        Err(AppError::NotAuthenticated)
    ));
}

#[tokio::test]
async fn public_account_actions_never_send_token() {
    let mut server = Server::new_async().await;
    let register = server
        .mock("POST", PATH)
        .match_query(Matcher::Regex("^action=register$".into()))
        .match_body(Matcher::Json(json!({
            "name": "Grace",
            "email": "grace@example.com",
            "password": "pw",
            "role": "instructor"
        })))
        .with_status(200)
        .with_body(OK)
        .create_async()
        .await;
    let forgot = server
        .mock("POST", PATH)
        .match_query(Matcher::Regex("^action=forgot_password$".into()))
        .match_body(Matcher::Json(json!({"email": "grace@example.com"})))
        .with_status(200)
        .with_body(OK)
        .create_async()
        .await;
    let reset = server
        .mock("POST", PATH)
        .match_query(Matcher::Regex("^action=reset_password$".into()))
        .match_body(Matcher::Json(json!({
            "email": "grace@example.com",
            "reset_token": "R1",
            "new_password": "pw2"
        })))
        .with_status(200)
        .with_body(OK)
        .create_async()
        .await;

    // a cached token must not leak into public actions
    let client = logged_in_client(&server).await;
    let request = RegisterRequest::new("Grace", "grace@example.com", "pw").with_role("instructor");
    assert!(client.register(&request).await.unwrap().success);
    assert!(client.forgot_password("grace@example.com").await.unwrap().success);
    let reset_request = ResetPasswordRequest {
        email: "grace@example.com".into(),
        reset_token: "R1".into(),
        new_password: "pw2".into(),
    };
    assert!(client.reset_password(&reset_request).await.unwrap().success);

    register.assert_async().await;
    forgot.assert_async().await;
    reset.assert_async().await;
    assert_eq!(client.auth().token().await.as_deref(), Some(TOKEN));
}

#[tokio::test]
async fn change_password_posts_both_passwords() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_query(authed_query(&[("action", "change_password")]))
        .match_body(Matcher::Json(
            json!({"current_password": "old", "new_password": "new"}),
        ))
        .with_status(200)
        .with_body(OK)
        .create_async()
        .await;

    let client = logged_in_client(&server).await;
    let request = ChangePasswordRequest {
        current_password: "old".into(),
        new_password: "new".into(),
    };
    let message = client.change_password(&request).await.unwrap();
    mock.assert_async().await;
    assert_eq!(message.message.as_deref(), Some("ok"));
}

#[tokio::test]
async fn null_or_unknown_role_falls_back_to_student() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", PATH)
        .match_query(Matcher::UrlEncoded("action".into(), "login".into()))
        .with_status(200)
        .with_body(
            r#"{"success":1,"token":"abc123",
                "user":{"id":"5","name":"Ada","email":"ada@example.com","role":null}}"#,
        )
        .create_async()
        .await;
    let profile = server
        .mock("GET", PATH)
        .match_query(authed_query(&[("action", "get_profile")]))
        .with_status(200)
        .with_body(r#"{"id":"5","name":"Ada","email":"ada@example.com","role":"moderator"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client.login("ada@example.com", "secret").await.unwrap();
    assert_eq!(response.user.unwrap().role, UserRole::Student);

    client.auth().set_token(TOKEN).await.unwrap();
    let user = client.get_profile().await.unwrap();
    assert_eq!(user.role, UserRole::Student);
    assert!(!user.is_instructor());

    login.assert_async().await;
    profile.assert_async().await;
}
