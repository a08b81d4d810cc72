/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # LMS Client Prelude
//!
//! Imports the types and traits needed for most interactions with the API.
//!
//! ```rust
//! use lms_client::prelude::*;
//!
//! let config = Config::with_base_url("https://school.example.com/api.php");
//! let client = Client::new(config).unwrap();
//! assert_eq!(client.asset_origin(), "https://school.example.com");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the client
pub use crate::application::config::{ApiConfig, Config};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND AUTHENTICATION
// ============================================================================

/// Client all services are implemented on
pub use crate::application::client::Client;

/// Token holder and unauthorized hook
pub use crate::application::auth::{Auth, UnauthorizedHandler};

/// Session persistence
pub use crate::session::store::{FileSessionStore, MemorySessionStore, SessionStore};

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::services::{
    AccountService, CourseService, DashboardService, EnrollmentService, LessonService,
    QuizService, ReviewService,
};

// ============================================================================
// TRANSPORT
// ============================================================================

/// Request description and dispatch
pub use crate::model::http::{
    ApiRequest, AuthMode, FileUpload, HttpClient, MultipartField, RequestBody,
};

// ============================================================================
// REQUEST AND RESPONSE MODELS
// ============================================================================

pub use crate::model::auth::{LoginRequest, LoginResponse, StoredSession};
pub use crate::model::requests::{
    ChangePasswordRequest, CourseFilter, CourseRequest, ForgotPasswordRequest, LessonRequest,
    PublishRequest, QuizRequest, RegisterRequest, ReorderLessonsRequest, ResetPasswordRequest,
    ReviewRequest, SubmitQuizRequest, UpdateProfileRequest,
};
pub use crate::model::responses::{
    ApiMessage, CategoriesResponse, CoursesResponse, EnrollmentsResponse, LessonsResponse,
    QuizResultsResponse, ReviewsResponse, StudentsResponse, UploadResponse,
};

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

pub use crate::presentation::{
    AnswerOption, Category, Certificate, Course, CourseLevel, CourseProgress, DashboardStats,
    Enrollment, Lesson, LessonType, Question, Quiz, QuizAnswer, QuizResult, Review, Student,
    User, UserRole,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Avatar URL normalization
pub use crate::model::utils::{AvatarUrls, normalize_avatar_url};

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
