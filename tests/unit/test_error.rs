use lms_client::prelude::*;
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_display() {
    assert_eq!(AppError::NotAuthenticated.to_string(), "not authenticated");
    assert_eq!(AppError::Unauthorized.to_string(), "unauthorized");
    assert_eq!(
        AppError::InvalidInput("bad".into()).to_string(),
        "invalid input: bad"
    );
    let api = AppError::Api {
        status: StatusCode::NOT_FOUND,
        body: "missing".into(),
    };
    assert_eq!(api.to_string(), "api error 404 Not Found: missing");
}

#[test]
fn test_status() {
    assert_eq!(AppError::Unauthorized.status(), Some(StatusCode::UNAUTHORIZED));
    let api = AppError::Api {
        status: StatusCode::FORBIDDEN,
        body: String::new(),
    };
    assert_eq!(api.status(), Some(StatusCode::FORBIDDEN));
    assert_eq!(AppError::NotAuthenticated.status(), None);
}

#[test]
fn test_from_serde_keeps_source() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: AppError = parse_err.into();
    assert!(matches!(err, AppError::Json(_)));
    assert!(err.source().is_some());
    assert!(err.to_string().starts_with("json error:"));
}

#[test]
fn test_from_io() {
    let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert_eq!(err.to_string(), "io error: gone");
    assert!(err.source().is_some());
}
