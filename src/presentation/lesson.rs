/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::presentation::serialization::{
    lenient_bool, lenient_enum, option_string_empty_as_none, string_or_u64, string_or_u64_opt,
};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Kind of content a lesson carries
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LessonType {
    /// Video lesson
    #[default]
    Video,
    /// Text/article lesson
    Text,
    /// Lesson that only hosts a quiz
    Quiz,
}

/// A lesson inside a course
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Lesson {
    /// Unique identifier
    #[serde(deserialize_with = "string_or_u64")]
    pub id: u64,
    /// Owning course
    #[serde(deserialize_with = "string_or_u64")]
    pub course_id: u64,
    /// Lesson title
    pub title: String,
    /// Body text or description
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub content: Option<String>,
    /// Content kind
    #[serde(default, rename = "type", deserialize_with = "lenient_enum")]
    pub lesson_type: LessonType,
    /// Video URL for video lessons
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub video_url: Option<String>,
    /// Duration in minutes
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub duration: Option<u64>,
    /// Position within the course
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub position: Option<u64>,
    /// Whether the lesson can be watched without enrolling
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_preview: bool,
    /// Whether the current user completed it
    #[serde(default, deserialize_with = "lenient_bool")]
    pub completed: bool,
}
