use crate::common::{OK, PATH, authed_query, client_for, logged_in_client};
use lms_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn reviews_are_public_and_avatars_rewritten() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PATH)
        .match_query(Matcher::Regex("^action=get_reviews&course_id=9$".into()))
        .with_status(200)
        .with_body(
            r#"{"average_rating":"4.5","total":"2","reviews":[
                {"id":"1","course_id":"9","user_name":"Ada","user_avatar":"uploads/a.png","rating":"5","comment":"Great"},
                {"id":"2","course_id":"9","user_name":"Bob","user_avatar":"","rating":4}
            ]}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client.get_reviews(9).await.unwrap();
    mock.assert_async().await;

    assert_eq!(response.average_rating, Some(4.5));
    assert_eq!(response.total, Some(2));
    assert_eq!(
        response.reviews[0].user_avatar.as_deref(),
        Some(format!("{}/uploads/a.png", server.url()).as_str())
    );
    assert_eq!(response.reviews[1].user_avatar, None);
    assert_eq!(response.reviews[1].rating, 4);
}

#[tokio::test]
async fn get_reviews_sends_token_when_logged_in() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PATH)
        .match_query(authed_query(&[("action", "get_reviews"), ("course_id", "9")]))
        .with_status(200)
        .with_body(r#"{"reviews":[]}"#)
        .create_async()
        .await;

    let client = logged_in_client(&server).await;
    assert!(client.get_reviews(9).await.unwrap().reviews.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn review_mutations() {
    let mut server = Server::new_async().await;
    let add = server
        .mock("POST", PATH)
        .match_query(authed_query(&[("action", "add_review"), ("course_id", "9")]))
        .match_body(Matcher::Json(json!({"rating": 5, "comment": "Clear and thorough"})))
        .with_status(200)
        .with_body(r#"{"success":true,"id":3}"#)
        .create_async()
        .await;
    let update = server
        .mock("POST", PATH)
        .match_query(authed_query(&[("action", "update_review"), ("id", "3")]))
        .match_body(Matcher::Json(json!({"rating": 4})))
        .with_status(200)
        .with_body(OK)
        .create_async()
        .await;
    let delete = server
        .mock("POST", PATH)
        .match_query(authed_query(&[("action", "delete_review"), ("id", "3")]))
        .with_status(200)
        .with_body(OK)
        .create_async()
        .await;

    let client = logged_in_client(&server).await;
    let created = client
        .add_review(9, &ReviewRequest::new(5).with_comment("Clear and thorough"))
        .await
        .unwrap();
    assert_eq!(created.id, Some(3));
    client.update_review(3, &ReviewRequest::new(4)).await.unwrap();
    client.delete_review(3).await.unwrap();

    add.assert_async().await;
    update.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn duplicate_review_passes_backend_error_through() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_query(authed_query(&[("action", "add_review"), ("course_id", "9")]))
        .with_status(409)
        .with_body(r#"{"error":"already reviewed"}"#)
        .create_async()
        .await;

    let client = logged_in_client(&server).await;
    let err = client
        .add_review(9, &ReviewRequest::new(5))
        .await
        .unwrap_err();
    mock.assert_async().await;

    match err {
        AppError::Api { status, body } => {
            assert_eq!(status.as_u16(), 409);
            assert!(body.contains("already reviewed"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(client.auth().is_authenticated().await);
}
