/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::utils::{AvatarUrls, normalize_avatar_url};
use crate::presentation::course::Course;
use crate::presentation::serialization::{
    option_string_empty_as_none, string_or_f64_opt, string_or_u64, string_or_u64_opt,
    vec_string_or_u64,
};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A course the current user is enrolled in, with progress
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Enrollment {
    /// Enrolled course; its `id` is the course id
    #[serde(flatten)]
    pub course: Course,
    /// Completion percentage
    #[serde(default, deserialize_with = "string_or_f64_opt")]
    pub progress: Option<f64>,
    /// Enrollment timestamp as sent by the backend
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub enrolled_at: Option<String>,
}

impl AvatarUrls for Enrollment {
    fn normalize_avatars(&mut self, origin: &str) {
        self.course.normalize_avatars(origin);
    }
}

/// Progress of the current user through one course
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CourseProgress {
    /// Course id
    #[serde(deserialize_with = "string_or_u64")]
    pub course_id: u64,
    /// Lessons completed
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub completed_lessons: Option<u64>,
    /// Lessons in the course
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub total_lessons: Option<u64>,
    /// Completion percentage
    #[serde(default, deserialize_with = "string_or_f64_opt")]
    pub percentage: Option<f64>,
    /// Ids of completed lessons
    #[serde(default, deserialize_with = "vec_string_or_u64")]
    pub completed_lesson_ids: Vec<u64>,
}

/// A student enrolled in one of the instructor's courses
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Student {
    /// User id
    #[serde(deserialize_with = "string_or_u64")]
    pub id: u64,
    /// Display name
    pub name: String,
    /// Email
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub email: Option<String>,
    /// Avatar URL
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub avatar: Option<String>,
    /// Completion percentage
    #[serde(default, deserialize_with = "string_or_f64_opt")]
    pub progress: Option<f64>,
    /// Enrollment timestamp as sent by the backend
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub enrolled_at: Option<String>,
}

impl AvatarUrls for Student {
    fn normalize_avatars(&mut self, origin: &str) {
        self.avatar = self
            .avatar
            .as_deref()
            .and_then(|raw| normalize_avatar_url(raw, origin));
    }
}
