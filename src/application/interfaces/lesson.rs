use crate::error::AppError;
use crate::model::http::FileUpload;
use crate::model::requests::LessonRequest;
use crate::model::responses::{ApiMessage, LessonsResponse, UploadResponse};
use crate::presentation::lesson::Lesson;
use async_trait::async_trait;

/// Interface for the lesson service
#[async_trait]
pub trait LessonService: Send + Sync {
    /// Lists the lessons of a course
    async fn get_lessons(&self, course_id: u64) -> Result<LessonsResponse, AppError>;

    /// Gets one lesson with its content
    async fn get_lesson(&self, lesson_id: u64) -> Result<Lesson, AppError>;

    /// Creates a lesson; the new id is in `ApiMessage::id`
    async fn create_lesson(&self, request: &LessonRequest) -> Result<ApiMessage, AppError>;

    /// Replaces the editable fields of a lesson
    async fn update_lesson(
        &self,
        lesson_id: u64,
        request: &LessonRequest,
    ) -> Result<ApiMessage, AppError>;

    /// Deletes a lesson
    async fn delete_lesson(&self, lesson_id: u64) -> Result<ApiMessage, AppError>;

    /// Sets the order of the lessons of a course
    ///
    /// # Arguments
    /// * `course_id` - Course whose lessons are reordered
    /// * `lesson_ids` - Every lesson id of the course, in the new order
    async fn reorder_lessons(
        &self,
        course_id: u64,
        lesson_ids: &[u64],
    ) -> Result<ApiMessage, AppError>;

    /// Uploads the video of a lesson
    async fn upload_lesson_video(
        &self,
        lesson_id: u64,
        file: FileUpload,
    ) -> Result<UploadResponse, AppError>;

    /// Marks a lesson as completed by the logged in user
    async fn mark_lesson_complete(&self, lesson_id: u64) -> Result<ApiMessage, AppError>;
}
