/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::utils::{AvatarUrls, normalize_avatar_url};
use crate::presentation::serialization::{
    lenient_bool, lenient_enum, option_string_empty_as_none, string_or_f64_opt, string_or_u64,
    string_or_u64_opt,
};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Difficulty level of a course
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    /// No prior knowledge required
    #[default]
    Beginner,
    /// Some familiarity expected
    Intermediate,
    /// For experienced learners
    Advanced,
}

impl CourseLevel {
    /// Value used in query strings
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseLevel::Beginner => "beginner",
            CourseLevel::Intermediate => "intermediate",
            CourseLevel::Advanced => "advanced",
        }
    }
}

/// Course category
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Category {
    /// Unique identifier
    #[serde(deserialize_with = "string_or_u64")]
    pub id: u64,
    /// Category name
    pub name: String,
    /// URL slug
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub slug: Option<String>,
    /// Number of published courses in the category
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub course_count: Option<u64>,
}

/// A course in the catalog
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Course {
    /// Unique identifier
    #[serde(deserialize_with = "string_or_u64")]
    pub id: u64,
    /// Course title
    pub title: String,
    /// Long description
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub description: Option<String>,
    /// Price, `None` or `0` for free courses
    #[serde(default, deserialize_with = "string_or_f64_opt")]
    pub price: Option<f64>,
    /// Difficulty level
    #[serde(default, deserialize_with = "lenient_enum")]
    pub level: CourseLevel,
    /// Category id
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub category_id: Option<u64>,
    /// Category name, joined by the backend
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub category_name: Option<String>,
    /// Author id
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub instructor_id: Option<u64>,
    /// Author display name
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub instructor_name: Option<String>,
    /// Author avatar
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub instructor_avatar: Option<String>,
    /// Thumbnail image URL
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub thumbnail: Option<String>,
    /// Whether the course is visible in the catalog
    #[serde(default, deserialize_with = "lenient_bool")]
    pub published: bool,
    /// Whether the course is promoted on the home page
    #[serde(default, deserialize_with = "lenient_bool")]
    pub featured: bool,
    /// Average review rating
    #[serde(default, deserialize_with = "string_or_f64_opt")]
    pub rating: Option<f64>,
    /// Number of reviews
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub review_count: Option<u64>,
    /// Number of lessons
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub lesson_count: Option<u64>,
    /// Number of enrolled students
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub student_count: Option<u64>,
    /// Whether the current user is enrolled; only meaningful with a token
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_enrolled: bool,
    /// Creation timestamp as sent by the backend
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub created_at: Option<String>,
    /// Last update timestamp as sent by the backend
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub updated_at: Option<String>,
}

impl Course {
    /// Whether the course can be taken without paying
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price.is_none_or(|p| p <= 0.0)
    }
}

impl AvatarUrls for Course {
    fn normalize_avatars(&mut self, origin: &str) {
        self.instructor_avatar = self
            .instructor_avatar
            .as_deref()
            .and_then(|raw| normalize_avatar_url(raw, origin));
    }
}
