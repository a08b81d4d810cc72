/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::services::EnrollmentService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::responses::{ApiMessage, EnrollmentsResponse, StudentsResponse};
use crate::presentation::dashboard::Certificate;
use crate::presentation::enrollment::CourseProgress;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl EnrollmentService for Client {
    async fn enroll(&self, course_id: u64) -> Result<ApiMessage, AppError> {
        info!("Enrolling in course {}", course_id);
        self.send(ApiRequest::post("enroll").param("course_id", course_id))
            .await
    }

    async fn unenroll(&self, course_id: u64) -> Result<ApiMessage, AppError> {
        info!("Leaving course {}", course_id);
        self.send(ApiRequest::post("unenroll").param("course_id", course_id))
            .await
    }

    async fn get_enrolled_courses(&self) -> Result<EnrollmentsResponse, AppError> {
        debug!("Getting enrolled courses");
        let result: EnrollmentsResponse = self
            .send_normalized(ApiRequest::get("get_enrolled_courses"))
            .await?;
        debug!("Enrollments obtained: {}", result.enrollments.len());
        Ok(result)
    }

    async fn get_course_progress(&self, course_id: u64) -> Result<CourseProgress, AppError> {
        debug!("Getting progress for course {}", course_id);
        self.send(ApiRequest::get("get_course_progress").param("course_id", course_id))
            .await
    }

    async fn get_course_students(&self, course_id: u64) -> Result<StudentsResponse, AppError> {
        debug!("Getting students of course {}", course_id);
        self.send_normalized(ApiRequest::get("get_course_students").param("course_id", course_id))
            .await
    }

    async fn get_certificate(&self, course_id: u64) -> Result<Certificate, AppError> {
        debug!("Getting certificate for course {}", course_id);
        self.send(ApiRequest::get("get_certificate").param("course_id", course_id))
            .await
    }
}
