use crate::error::AppError;
use crate::model::responses::{ApiMessage, EnrollmentsResponse, StudentsResponse};
use crate::presentation::dashboard::Certificate;
use crate::presentation::enrollment::CourseProgress;
use async_trait::async_trait;

/// Interface for the enrollment service
#[async_trait]
pub trait EnrollmentService: Send + Sync {
    /// Enrolls the logged in user in a course
    async fn enroll(&self, course_id: u64) -> Result<ApiMessage, AppError>;

    /// Leaves a course
    async fn unenroll(&self, course_id: u64) -> Result<ApiMessage, AppError>;

    /// Lists the courses the logged in user is enrolled in
    async fn get_enrolled_courses(&self) -> Result<EnrollmentsResponse, AppError>;

    /// Gets lesson completion for one course
    async fn get_course_progress(&self, course_id: u64) -> Result<CourseProgress, AppError>;

    /// Lists the students of a course; instructors only
    async fn get_course_students(&self, course_id: u64) -> Result<StudentsResponse, AppError>;

    /// Gets the completion certificate of a finished course
    async fn get_certificate(&self, course_id: u64) -> Result<Certificate, AppError>;
}
