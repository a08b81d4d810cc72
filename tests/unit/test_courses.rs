use crate::common::{OK, PATH, authed_query, client_for, logged_in_client, query};
use lms_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

const COURSES: &str = r#"{
    "courses": [
        {"id": "1", "title": "Rust 101", "price": "0.00", "level": "beginner",
         "published": "1", "instructor_avatar": "http://localhost/uploads/i1.png"},
        {"id": 2, "title": "Async Rust", "price": 49.5, "level": "advanced",
         "published": 1, "featured": true}
    ],
    "total": "2",
    "page": 1,
    "limit": "10"
}"#;

#[tokio::test]
async fn get_courses_without_token_is_anonymous() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PATH)
        .match_query(Matcher::Regex(
            "^action=get_courses&category_id=3&search=async\\+rust&level=advanced&page=2&limit=10$"
                .into(),
        ))
        .with_status(200)
        .with_body(COURSES)
        .create_async()
        .await;

    let client = client_for(&server);
    let filter = CourseFilter::new()
        .with_category(3)
        .with_search("async rust")
        .with_level(CourseLevel::Advanced)
        .with_page(2)
        .with_limit(10);
    let response = client.get_courses(&filter).await.unwrap();
    mock.assert_async().await;

    assert_eq!(response.total, Some(2));
    assert_eq!(response.courses.len(), 2);
    assert!(response.courses[0].is_free());
    assert!(!response.courses[1].is_free());
    assert!(response.courses[1].featured);
    assert_eq!(
        response.courses[0].instructor_avatar.as_deref(),
        Some(format!("{}/uploads/i1.png", server.url()).as_str())
    );
}

#[tokio::test]
async fn get_course_attaches_token_when_cached() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PATH)
        .match_query(authed_query(&[("action", "get_course"), ("id", "7")]))
        .with_status(200)
        .with_body(r#"{"id":7,"title":"Rust 101","is_enrolled":"1"}"#)
        .create_async()
        .await;

    let client = logged_in_client(&server).await;
    let course = client.get_course(7).await.unwrap();
    mock.assert_async().await;
    assert_eq!(course.id, 7);
    assert!(course.is_enrolled);
}

#[tokio::test]
async fn featured_and_categories() {
    let mut server = Server::new_async().await;
    let featured = server
        .mock("GET", PATH)
        .match_query(Matcher::Regex("^action=get_featured_courses$".into()))
        .with_status(200)
        .with_body(COURSES)
        .create_async()
        .await;
    let categories = server
        .mock("GET", PATH)
        .match_query(Matcher::Regex("^action=get_categories$".into()))
        .with_status(200)
        .with_body(r#"{"categories":[{"id":"1","name":"Programming","course_count":"12"}]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    assert_eq!(client.get_featured_courses().await.unwrap().courses.len(), 2);
    let response = client.get_categories().await.unwrap();
    featured.assert_async().await;
    categories.assert_async().await;

    assert_eq!(response.categories[0].name, "Programming");
    assert_eq!(response.categories[0].course_count, Some(12));
}

#[tokio::test]
async fn instructor_course_management() {
    let mut server = Server::new_async().await;
    let list = server
        .mock("GET", PATH)
        .match_query(authed_query(&[("action", "get_instructor_courses")]))
        .with_status(200)
        .with_body(COURSES)
        .create_async()
        .await;
    let create = server
        .mock("POST", PATH)
        .match_query(authed_query(&[("action", "create_course")]))
        .match_body(Matcher::Json(json!({
            "title": "Tokio in depth",
            "description": "Runtimes and tasks",
            "price": 19.0,
            "level": "intermediate",
            "category_id": 3
        })))
        .with_status(200)
        .with_body(r#"{"success":true,"message":"Course created","id":"31"}"#)
        .create_async()
        .await;
    let update = server
        .mock("POST", PATH)
        .match_query(authed_query(&[("action", "update_course"), ("id", "31")]))
        .match_body(Matcher::Json(json!({"title": "Tokio in depth, 2nd ed."})))
        .with_status(200)
        .with_body(OK)
        .create_async()
        .await;
    let publish = server
        .mock("POST", PATH)
        .match_query(authed_query(&[("action", "publish_course"), ("id", "31")]))
        .match_body(Matcher::Json(json!({"published": true})))
        .with_status(200)
        .with_body(OK)
        .create_async()
        .await;
    let delete = server
        .mock("POST", PATH)
        .match_query(authed_query(&[("action", "delete_course"), ("id", "31")]))
        .with_status(200)
        .with_body(OK)
        .create_async()
        .await;

    let client = logged_in_client(&server).await;
    assert_eq!(client.get_instructor_courses().await.unwrap().courses.len(), 2);

    let request = CourseRequest::new("Tokio in depth")
        .with_description("Runtimes and tasks")
        .with_price(19.0)
        .with_level(CourseLevel::Intermediate)
        .with_category(3);
    let created = client.create_course(&request).await.unwrap();
    assert_eq!(created.id, Some(31));

    client
        .update_course(31, &CourseRequest::new("Tokio in depth, 2nd ed."))
        .await
        .unwrap();
    client.publish_course(31, true).await.unwrap();
    client.delete_course(31).await.unwrap();

    list.assert_async().await;
    create.assert_async().await;
    update.assert_async().await;
    publish.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn upload_thumbnail_keeps_url_as_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_query(authed_query(&[
            ("action", "upload_course_thumbnail"),
            ("id", "31"),
        ]))
        .match_header("content-type", Matcher::Regex("^multipart/form-data".into()))
        .match_body(Matcher::Regex(r#"name="thumbnail"; filename="cover.jpg""#.into()))
        .with_status(200)
        .with_body(r#"{"success":true,"thumbnail":"uploads/thumbs/31.jpg"}"#)
        .create_async()
        .await;

    let client = logged_in_client(&server).await;
    let response = client
        .upload_course_thumbnail(31, FileUpload::new("cover.jpg", b"JPEG".to_vec()))
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(response.url.as_deref(), Some("uploads/thumbs/31.jpg"));
}

#[tokio::test]
async fn backend_error_passes_through() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PATH)
        .match_query(query(&[("action", "get_course"), ("id", "404")]))
        .with_status(404)
        .with_body(r#"{"success":false,"message":"Course not found"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.get_course(404).await.unwrap_err();
    mock.assert_async().await;

    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    match err {
        AppError::Api { body, .. } => assert!(body.contains("Course not found")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn null_and_unknown_levels_do_not_fail_the_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PATH)
        .match_query(query(&[("action", "get_courses")]))
        .with_status(200)
        .with_body(
            r#"{"courses":[
                {"id":"1","title":"Rust 101","level":null},
                {"id":"2","title":"Async Rust","level":"Advanced"},
                {"id":"3","title":"Embedded","level":"expert"},
                {"id":"4","title":"Macros","level":""}
            ]}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let page = client.get_courses(&CourseFilter::new()).await.unwrap();
    mock.assert_async().await;

    let levels: Vec<CourseLevel> = page.courses.iter().map(|c| c.level).collect();
    assert_eq!(
        levels,
        vec![
            CourseLevel::Beginner,
            CourseLevel::Advanced,
            CourseLevel::Beginner,
            CourseLevel::Beginner,
        ]
    );
}
