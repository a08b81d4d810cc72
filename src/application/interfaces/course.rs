use crate::error::AppError;
use crate::model::http::FileUpload;
use crate::model::requests::{CourseFilter, CourseRequest};
use crate::model::responses::{ApiMessage, CategoriesResponse, CoursesResponse, UploadResponse};
use crate::presentation::course::Course;
use async_trait::async_trait;

/// Interface for the course service
#[async_trait]
pub trait CourseService: Send + Sync {
    /// Lists published courses matching `filter`
    async fn get_courses(&self, filter: &CourseFilter) -> Result<CoursesResponse, AppError>;

    /// Gets one course
    async fn get_course(&self, course_id: u64) -> Result<Course, AppError>;

    /// Lists courses promoted on the home page
    async fn get_featured_courses(&self) -> Result<CoursesResponse, AppError>;

    /// Lists every category
    async fn get_categories(&self) -> Result<CategoriesResponse, AppError>;

    /// Lists the courses authored by the logged in instructor
    async fn get_instructor_courses(&self) -> Result<CoursesResponse, AppError>;

    /// Creates a course; the new id is in `ApiMessage::id`
    async fn create_course(&self, request: &CourseRequest) -> Result<ApiMessage, AppError>;

    /// Replaces the editable fields of a course
    async fn update_course(
        &self,
        course_id: u64,
        request: &CourseRequest,
    ) -> Result<ApiMessage, AppError>;

    /// Deletes a course
    async fn delete_course(&self, course_id: u64) -> Result<ApiMessage, AppError>;

    /// Shows or hides a course in the catalog
    async fn publish_course(&self, course_id: u64, published: bool)
    -> Result<ApiMessage, AppError>;

    /// Uploads the course thumbnail image
    async fn upload_course_thumbnail(
        &self,
        course_id: u64,
        file: FileUpload,
    ) -> Result<UploadResponse, AppError>;
}
