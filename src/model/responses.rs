/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::utils::{AvatarUrls, normalize_avatar_url};
use crate::presentation::course::{Category, Course};
use crate::presentation::enrollment::{Enrollment, Student};
use crate::presentation::lesson::Lesson;
use crate::presentation::quiz::QuizResult;
use crate::presentation::review::Review;
use crate::presentation::serialization::{
    lenient_bool, option_string_empty_as_none, string_or_f64_opt, string_or_u64_opt,
};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Generic acknowledgement returned by mutating actions
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ApiMessage {
    /// Whether the backend applied the change
    #[serde(default, deserialize_with = "lenient_bool")]
    pub success: bool,
    /// Human readable message
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub message: Option<String>,
    /// Id of the created row, for `create_*` actions
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub id: Option<u64>,
}

/// Result of a multipart upload
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    /// Whether the file was stored
    #[serde(default, deserialize_with = "lenient_bool")]
    pub success: bool,
    /// Human readable message
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub message: Option<String>,
    /// Public URL of the stored file
    #[serde(
        default,
        alias = "avatar",
        alias = "thumbnail",
        alias = "video_url",
        deserialize_with = "option_string_empty_as_none"
    )]
    pub url: Option<String>,
}

impl AvatarUrls for UploadResponse {
    fn normalize_avatars(&mut self, origin: &str) {
        self.url = self
            .url
            .as_deref()
            .and_then(|raw| normalize_avatar_url(raw, origin));
    }
}

/// One page of the course catalog
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CoursesResponse {
    /// Courses on this page
    #[serde(default)]
    pub courses: Vec<Course>,
    /// Total matching courses
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub total: Option<u64>,
    /// Current page
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub page: Option<u64>,
    /// Page size
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub limit: Option<u64>,
}

impl AvatarUrls for CoursesResponse {
    fn normalize_avatars(&mut self, origin: &str) {
        self.courses.normalize_avatars(origin);
    }
}

/// Every category
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CategoriesResponse {
    /// Categories
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Courses the current user is enrolled in
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct EnrollmentsResponse {
    /// Enrollments with their course
    #[serde(default, alias = "courses")]
    pub enrollments: Vec<Enrollment>,
}

impl AvatarUrls for EnrollmentsResponse {
    fn normalize_avatars(&mut self, origin: &str) {
        self.enrollments.normalize_avatars(origin);
    }
}

/// Students of a course
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct StudentsResponse {
    /// Students
    #[serde(default)]
    pub students: Vec<Student>,
}

impl AvatarUrls for StudentsResponse {
    fn normalize_avatars(&mut self, origin: &str) {
        self.students.normalize_avatars(origin);
    }
}

/// Lessons of a course
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct LessonsResponse {
    /// Lessons in course order
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

/// Reviews of a course
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ReviewsResponse {
    /// Reviews, newest first
    #[serde(default)]
    pub reviews: Vec<Review>,
    /// Average rating over all reviews
    #[serde(default, deserialize_with = "string_or_f64_opt")]
    pub average_rating: Option<f64>,
    /// Number of reviews
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub total: Option<u64>,
}

impl AvatarUrls for ReviewsResponse {
    fn normalize_avatars(&mut self, origin: &str) {
        self.reviews.normalize_avatars(origin);
    }
}

/// Past attempts at a quiz
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct QuizResultsResponse {
    /// Attempts, newest first
    #[serde(default)]
    pub results: Vec<QuizResult>,
}
