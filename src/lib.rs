//! # LMS Client
//!
//! Typed async client for the LMS course platform API.
//!
//! The backend is a single endpoint script. Every operation is a GET or POST
//! to that endpoint with an `action` query parameter, the auth token as a
//! `token` query parameter, and an optional JSON or multipart body.
//!
//! ## Features
//!
//! - One method per backend action, grouped in service traits
//!   ([`AccountService`](application::services::AccountService),
//!   [`CourseService`](application::services::CourseService), ...)
//! - Token cached after login and checked locally before authenticated calls
//! - Optional persistence of the login to a JSON file
//! - Session dropped and a hook fired when the backend answers 401
//! - Avatar URLs rewritten to the configured asset origin
//!
//! ## Quick start
//!
//! ```ignore
//! use lms_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new())?;
//!
//!     client.login("ada@example.com", "secret").await?;
//!     for enrollment in client.get_enrolled_courses().await?.enrollments {
//!         info!("{} ({:?}%)", enrollment.course.title, enrollment.progress);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! Read from the environment or a `.env` file by [`Config::new`](application::config::Config::new):
//!
//! ```text
//! LMS_API_URL=https://school.example.com/api.php
//! LMS_API_TIMEOUT=30
//! LMS_ASSET_ORIGIN=https://cdn.example.com
//! LMS_SESSION_FILE=/home/ada/.config/lms/session.json
//! LOGLEVEL=INFO
//! ```

#![warn(missing_docs)]

/// Client, configuration, token holder and services
pub mod application;
/// Library constants
pub mod constants;
/// Error type
pub mod error;
/// Requests, responses and HTTP dispatch
pub mod model;
/// Convenient re-exports
pub mod prelude;
/// Data-transfer shapes mirroring the backend schema
pub mod presentation;
/// Session persistence
pub mod session;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
