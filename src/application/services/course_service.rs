/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::services::CourseService;
use crate::constants::THUMBNAIL_FIELD;
use crate::error::AppError;
use crate::model::http::{ApiRequest, FileUpload};
use crate::model::requests::{CourseFilter, CourseRequest, PublishRequest};
use crate::model::responses::{ApiMessage, CategoriesResponse, CoursesResponse, UploadResponse};
use crate::presentation::course::Course;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl CourseService for Client {
    async fn get_courses(&self, filter: &CourseFilter) -> Result<CoursesResponse, AppError> {
        debug!("Getting courses with filter {:?}", filter);
        let request = ApiRequest::get("get_courses")
            .optional_auth()
            .params(filter.to_params());
        let result: CoursesResponse = self.send_normalized(request).await?;
        debug!("Courses obtained: {}", result.courses.len());
        Ok(result)
    }

    async fn get_course(&self, course_id: u64) -> Result<Course, AppError> {
        debug!("Getting course {}", course_id);
        let request = ApiRequest::get("get_course")
            .optional_auth()
            .param("id", course_id);
        self.send_normalized(request).await
    }

    async fn get_featured_courses(&self) -> Result<CoursesResponse, AppError> {
        debug!("Getting featured courses");
        let request = ApiRequest::get("get_featured_courses").optional_auth();
        self.send_normalized(request).await
    }

    async fn get_categories(&self) -> Result<CategoriesResponse, AppError> {
        debug!("Getting categories");
        self.send(ApiRequest::get("get_categories").public()).await
    }

    async fn get_instructor_courses(&self) -> Result<CoursesResponse, AppError> {
        debug!("Getting instructor courses");
        self.send_normalized(ApiRequest::get("get_instructor_courses"))
            .await
    }

    async fn create_course(&self, request: &CourseRequest) -> Result<ApiMessage, AppError> {
        info!("Creating course {}", request.title);
        let request = ApiRequest::post("create_course").json(request)?;
        self.send(request).await
    }

    async fn update_course(
        &self,
        course_id: u64,
        request: &CourseRequest,
    ) -> Result<ApiMessage, AppError> {
        info!("Updating course {}", course_id);
        let request = ApiRequest::post("update_course")
            .param("id", course_id)
            .json(request)?;
        self.send(request).await
    }

    async fn delete_course(&self, course_id: u64) -> Result<ApiMessage, AppError> {
        info!("Deleting course {}", course_id);
        self.send(ApiRequest::post("delete_course").param("id", course_id))
            .await
    }

    async fn publish_course(
        &self,
        course_id: u64,
        published: bool,
    ) -> Result<ApiMessage, AppError> {
        info!("Setting course {} published={}", course_id, published);
        let request = ApiRequest::post("publish_course")
            .param("id", course_id)
            .json(&PublishRequest { published })?;
        self.send(request).await
    }

    async fn upload_course_thumbnail(
        &self,
        course_id: u64,
        file: FileUpload,
    ) -> Result<UploadResponse, AppError> {
        info!("Uploading thumbnail {} for course {}", file.file_name, course_id);
        let request = ApiRequest::post("upload_course_thumbnail")
            .param("id", course_id)
            .file(THUMBNAIL_FIELD, file);
        self.send(request).await
    }
}
