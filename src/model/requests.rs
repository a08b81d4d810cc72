/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::presentation::course::CourseLevel;
use crate::presentation::lesson::LessonType;
use crate::presentation::quiz::{Question, QuizAnswer};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of the `register` action
#[derive(Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Password
    pub password: String,
    /// Requested role (`student` or `instructor`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl RegisterRequest {
    /// Creates a student registration
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role: None,
        }
    }

    /// Set the requested role
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .field("role", &self.role)
            .finish()
    }
}

/// Body of the `update_profile` action; only set fields are sent
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct UpdateProfileRequest {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New biography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// New phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UpdateProfileRequest {
    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the bio
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Set the phone
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// Body of the `change_password` action
#[derive(Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    /// Password currently in use
    pub current_password: String,
    /// Replacement password
    pub new_password: String,
}

impl fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChangePasswordRequest { .. }")
    }
}

/// Body of the `forgot_password` action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForgotPasswordRequest {
    /// Account email
    pub email: String,
}

/// Body of the `reset_password` action
#[derive(Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    /// Account email
    pub email: String,
    /// Reset code received by email
    pub reset_token: String,
    /// Replacement password
    pub new_password: String,
}

impl fmt::Debug for ResetPasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetPasswordRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Query filters for the `get_courses` action
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    /// Restrict to one category
    pub category_id: Option<u64>,
    /// Free text search
    pub search: Option<String>,
    /// Restrict to one level
    pub level: Option<CourseLevel>,
    /// Page number, 1-based
    pub page: Option<u32>,
    /// Page size
    pub limit: Option<u32>,
}

impl CourseFilter {
    /// Empty filter, returns the first page of the catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category
    pub fn with_category(mut self, category_id: u64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Set the search text
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set the level
    pub fn with_level(mut self, level: CourseLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the page
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query parameters in the order they are appended to the URL
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(id) = self.category_id {
            params.push(("category_id", id.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(("search", search.to_string()));
        }
        if let Some(level) = self.level {
            params.push(("level", level.as_str().to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

/// Body of the `create_course` and `update_course` actions
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CourseRequest {
    /// Course title
    pub title: String,
    /// Long description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price, omitted for free courses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Difficulty level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<CourseLevel>,
    /// Category id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
}

impl CourseRequest {
    /// Creates a course body with just the title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the price
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the level
    pub fn with_level(mut self, level: CourseLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the category
    pub fn with_category(mut self, category_id: u64) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Body of the `publish_course` action
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishRequest {
    /// Target visibility
    pub published: bool,
}

/// Body of the `create_lesson` and `update_lesson` actions
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct LessonRequest {
    /// Owning course
    pub course_id: u64,
    /// Lesson title
    pub title: String,
    /// Body text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Content kind
    #[serde(rename = "type")]
    pub lesson_type: LessonType,
    /// Video URL when the video is hosted elsewhere
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Duration in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    /// Position within the course
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u64>,
    /// Whether the lesson is a free preview
    pub is_preview: bool,
}

impl LessonRequest {
    /// Creates a lesson body
    pub fn new(course_id: u64, title: impl Into<String>, lesson_type: LessonType) -> Self {
        Self {
            course_id,
            title: title.into(),
            lesson_type,
            ..Default::default()
        }
    }

    /// Set the content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the external video URL
    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    /// Set the duration in minutes
    pub fn with_duration(mut self, minutes: u64) -> Self {
        self.duration = Some(minutes);
        self
    }

    /// Set the position
    pub fn with_position(mut self, position: u64) -> Self {
        self.position = Some(position);
        self
    }

    /// Mark the lesson as a free preview
    pub fn as_preview(mut self) -> Self {
        self.is_preview = true;
        self
    }
}

/// Body of the `reorder_lessons` action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReorderLessonsRequest {
    /// Lesson ids in their new order
    pub order: Vec<u64>,
}

/// Body of the `create_quiz` and `update_quiz` actions
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct QuizRequest {
    /// Owning lesson
    pub lesson_id: u64,
    /// Quiz title
    pub title: String,
    /// Instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Minimum score percentage to pass
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_score: Option<f64>,
    /// Time limit in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u64>,
    /// Questions with their options
    pub questions: Vec<Question>,
}

impl QuizRequest {
    /// Creates a quiz body without questions
    pub fn new(lesson_id: u64, title: impl Into<String>) -> Self {
        Self {
            lesson_id,
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the pass score
    pub fn with_pass_score(mut self, pass_score: f64) -> Self {
        self.pass_score = Some(pass_score);
        self
    }

    /// Set the time limit
    pub fn with_time_limit(mut self, minutes: u64) -> Self {
        self.time_limit = Some(minutes);
        self
    }

    /// Append a question
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }
}

/// Body of the `submit_quiz` action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitQuizRequest {
    /// One entry per answered question
    pub answers: Vec<QuizAnswer>,
}

/// Body of the `add_review` and `update_review` actions
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ReviewRequest {
    /// Star rating; the backend validates the range
    pub rating: u8,
    /// Optional comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ReviewRequest {
    /// Creates a review body
    pub fn new(rating: u8) -> Self {
        Self {
            rating,
            comment: None,
        }
    }

    /// Set the comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
