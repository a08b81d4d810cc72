use crate::error::AppError;
use crate::model::requests::ReviewRequest;
use crate::model::responses::{ApiMessage, ReviewsResponse};
use async_trait::async_trait;

/// Interface for the review service
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// Lists the reviews of a course
    async fn get_reviews(&self, course_id: u64) -> Result<ReviewsResponse, AppError>;

    /// Reviews a course the logged in user is enrolled in
    async fn add_review(
        &self,
        course_id: u64,
        request: &ReviewRequest,
    ) -> Result<ApiMessage, AppError>;

    /// Edits one of the logged in user's reviews
    async fn update_review(
        &self,
        review_id: u64,
        request: &ReviewRequest,
    ) -> Result<ApiMessage, AppError>;

    /// Deletes one of the logged in user's reviews
    async fn delete_review(&self, review_id: u64) -> Result<ApiMessage, AppError>;
}
