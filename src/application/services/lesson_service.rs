/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::services::LessonService;
use crate::constants::VIDEO_FIELD;
use crate::error::AppError;
use crate::model::http::{ApiRequest, FileUpload};
use crate::model::requests::{LessonRequest, ReorderLessonsRequest};
use crate::model::responses::{ApiMessage, LessonsResponse, UploadResponse};
use crate::presentation::lesson::Lesson;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl LessonService for Client {
    async fn get_lessons(&self, course_id: u64) -> Result<LessonsResponse, AppError> {
        debug!("Getting lessons of course {}", course_id);
        let request = ApiRequest::get("get_lessons")
            .optional_auth()
            .param("course_id", course_id);
        let result: LessonsResponse = self.send(request).await?;
        debug!("Lessons obtained: {}", result.lessons.len());
        Ok(result)
    }

    async fn get_lesson(&self, lesson_id: u64) -> Result<Lesson, AppError> {
        debug!("Getting lesson {}", lesson_id);
        self.send(ApiRequest::get("get_lesson").param("id", lesson_id))
            .await
    }

    async fn create_lesson(&self, request: &LessonRequest) -> Result<ApiMessage, AppError> {
        info!("Creating lesson {} in course {}", request.title, request.course_id);
        let request = ApiRequest::post("create_lesson").json(request)?;
        self.send(request).await
    }

    async fn update_lesson(
        &self,
        lesson_id: u64,
        request: &LessonRequest,
    ) -> Result<ApiMessage, AppError> {
        info!("Updating lesson {}", lesson_id);
        let request = ApiRequest::post("update_lesson")
            .param("id", lesson_id)
            .json(request)?;
        self.send(request).await
    }

    async fn delete_lesson(&self, lesson_id: u64) -> Result<ApiMessage, AppError> {
        info!("Deleting lesson {}", lesson_id);
        self.send(ApiRequest::post("delete_lesson").param("id", lesson_id))
            .await
    }

    async fn reorder_lessons(
        &self,
        course_id: u64,
        lesson_ids: &[u64],
    ) -> Result<ApiMessage, AppError> {
        info!("Reordering {} lessons of course {}", lesson_ids.len(), course_id);
        let body = ReorderLessonsRequest {
            order: lesson_ids.to_vec(),
        };
        let request = ApiRequest::post("reorder_lessons")
            .param("course_id", course_id)
            .json(&body)?;
        self.send(request).await
    }

    async fn upload_lesson_video(
        &self,
        lesson_id: u64,
        file: FileUpload,
    ) -> Result<UploadResponse, AppError> {
        info!("Uploading video {} for lesson {}", file.file_name, lesson_id);
        let request = ApiRequest::post("upload_lesson_video")
            .param("id", lesson_id)
            .file(VIDEO_FIELD, file);
        self.send(request).await
    }

    async fn mark_lesson_complete(&self, lesson_id: u64) -> Result<ApiMessage, AppError> {
        info!("Marking lesson {} complete", lesson_id);
        self.send(ApiRequest::post("mark_lesson_complete").param("id", lesson_id))
            .await
    }
}
