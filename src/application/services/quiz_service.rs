/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::services::QuizService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::requests::{QuizRequest, SubmitQuizRequest};
use crate::model::responses::{ApiMessage, QuizResultsResponse};
use crate::presentation::quiz::{Quiz, QuizAnswer, QuizResult};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl QuizService for Client {
    async fn get_quiz(&self, lesson_id: u64) -> Result<Quiz, AppError> {
        debug!("Getting quiz of lesson {}", lesson_id);
        let quiz: Quiz = self
            .send(ApiRequest::get("get_quiz").param("lesson_id", lesson_id))
            .await?;
        debug!("Quiz {} has {} questions", quiz.id, quiz.questions.len());
        Ok(quiz)
    }

    async fn create_quiz(&self, request: &QuizRequest) -> Result<ApiMessage, AppError> {
        info!("Creating quiz {} for lesson {}", request.title, request.lesson_id);
        let request = ApiRequest::post("create_quiz").json(request)?;
        self.send(request).await
    }

    async fn update_quiz(
        &self,
        quiz_id: u64,
        request: &QuizRequest,
    ) -> Result<ApiMessage, AppError> {
        info!("Updating quiz {}", quiz_id);
        let request = ApiRequest::post("update_quiz")
            .param("id", quiz_id)
            .json(request)?;
        self.send(request).await
    }

    async fn delete_quiz(&self, quiz_id: u64) -> Result<ApiMessage, AppError> {
        info!("Deleting quiz {}", quiz_id);
        self.send(ApiRequest::post("delete_quiz").param("id", quiz_id))
            .await
    }

    async fn submit_quiz(
        &self,
        quiz_id: u64,
        answers: &[QuizAnswer],
    ) -> Result<QuizResult, AppError> {
        info!("Submitting {} answers to quiz {}", answers.len(), quiz_id);
        let body = SubmitQuizRequest {
            answers: answers.to_vec(),
        };
        let request = ApiRequest::post("submit_quiz")
            .param("id", quiz_id)
            .json(&body)?;
        let result: QuizResult = self.send(request).await?;
        debug!("Quiz {} passed={}", quiz_id, result.passed);
        Ok(result)
    }

    async fn get_quiz_results(&self, quiz_id: u64) -> Result<QuizResultsResponse, AppError> {
        debug!("Getting results of quiz {}", quiz_id);
        self.send(ApiRequest::get("get_quiz_results").param("id", quiz_id))
            .await
    }
}
