/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::services::ReviewService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::requests::ReviewRequest;
use crate::model::responses::{ApiMessage, ReviewsResponse};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ReviewService for Client {
    async fn get_reviews(&self, course_id: u64) -> Result<ReviewsResponse, AppError> {
        debug!("Getting reviews of course {}", course_id);
        let request = ApiRequest::get("get_reviews")
            .optional_auth()
            .param("course_id", course_id);
        self.send_normalized(request).await
    }

    async fn add_review(
        &self,
        course_id: u64,
        request: &ReviewRequest,
    ) -> Result<ApiMessage, AppError> {
        info!("Reviewing course {} with {} stars", course_id, request.rating);
        let request = ApiRequest::post("add_review")
            .param("course_id", course_id)
            .json(request)?;
        self.send(request).await
    }

    async fn update_review(
        &self,
        review_id: u64,
        request: &ReviewRequest,
    ) -> Result<ApiMessage, AppError> {
        info!("Updating review {}", review_id);
        let request = ApiRequest::post("update_review")
            .param("id", review_id)
            .json(request)?;
        self.send(request).await
    }

    async fn delete_review(&self, review_id: u64) -> Result<ApiMessage, AppError> {
        info!("Deleting review {}", review_id);
        self.send(ApiRequest::post("delete_review").param("id", review_id))
            .await
    }
}
