/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::presentation::serialization::{
    lenient_bool, option_string_empty_as_none, string_or_f64_opt, string_or_u64,
    string_or_u64_opt,
};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// One selectable answer of a question
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct AnswerOption {
    /// Unique identifier; absent when creating a quiz
    #[serde(default, deserialize_with = "string_or_u64_opt", skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Answer text
    pub text: String,
    /// Only present for instructors
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_correct: bool,
}

/// A quiz question
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Question {
    /// Unique identifier; absent when creating a quiz
    #[serde(default, deserialize_with = "string_or_u64_opt", skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Question text
    pub question: String,
    /// Possible answers
    #[serde(default)]
    pub options: Vec<AnswerOption>,
    /// Points awarded for a correct answer
    #[serde(default, deserialize_with = "string_or_u64_opt", skip_serializing_if = "Option::is_none")]
    pub points: Option<u64>,
}

/// A quiz attached to a lesson
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Quiz {
    /// Unique identifier
    #[serde(deserialize_with = "string_or_u64")]
    pub id: u64,
    /// Owning lesson
    #[serde(deserialize_with = "string_or_u64")]
    pub lesson_id: u64,
    /// Quiz title
    pub title: String,
    /// Instructions shown before starting
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub description: Option<String>,
    /// Minimum score percentage to pass
    #[serde(default, deserialize_with = "string_or_f64_opt")]
    pub pass_score: Option<f64>,
    /// Time limit in minutes
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub time_limit: Option<u64>,
    /// Questions
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// An answer submitted for one question
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizAnswer {
    /// Question being answered
    pub question_id: u64,
    /// Selected option
    pub option_id: u64,
}

impl QuizAnswer {
    /// Creates a new answer
    #[must_use]
    pub fn new(question_id: u64, option_id: u64) -> Self {
        Self {
            question_id,
            option_id,
        }
    }
}

/// Outcome of a quiz attempt
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct QuizResult {
    /// Attempt id
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub id: Option<u64>,
    /// Quiz id
    #[serde(deserialize_with = "string_or_u64")]
    pub quiz_id: u64,
    /// Score achieved, as a percentage
    #[serde(default, deserialize_with = "string_or_f64_opt")]
    pub score: Option<f64>,
    /// Whether the attempt reached the pass score
    #[serde(default, deserialize_with = "lenient_bool")]
    pub passed: bool,
    /// Number of correct answers
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub correct_answers: Option<u64>,
    /// Number of questions
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub total_questions: Option<u64>,
    /// Submission timestamp as sent by the backend
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub submitted_at: Option<String>,
}
