use crate::error::AppError;
use crate::model::requests::QuizRequest;
use crate::model::responses::{ApiMessage, QuizResultsResponse};
use crate::presentation::quiz::{Quiz, QuizAnswer, QuizResult};
use async_trait::async_trait;

/// Interface for the quiz service
#[async_trait]
pub trait QuizService: Send + Sync {
    /// Gets the quiz attached to a lesson
    async fn get_quiz(&self, lesson_id: u64) -> Result<Quiz, AppError>;

    /// Creates a quiz with its questions
    async fn create_quiz(&self, request: &QuizRequest) -> Result<ApiMessage, AppError>;

    /// Replaces a quiz and its questions
    async fn update_quiz(&self, quiz_id: u64, request: &QuizRequest)
    -> Result<ApiMessage, AppError>;

    /// Deletes a quiz
    async fn delete_quiz(&self, quiz_id: u64) -> Result<ApiMessage, AppError>;

    /// Submits an attempt; grading happens on the backend
    async fn submit_quiz(&self, quiz_id: u64, answers: &[QuizAnswer])
    -> Result<QuizResult, AppError>;

    /// Lists the logged in user's attempts at a quiz
    async fn get_quiz_results(&self, quiz_id: u64) -> Result<QuizResultsResponse, AppError>;
}
