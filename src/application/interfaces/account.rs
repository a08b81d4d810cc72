use crate::error::AppError;
use crate::model::auth::LoginResponse;
use crate::model::http::FileUpload;
use crate::model::requests::{
    ChangePasswordRequest, RegisterRequest, ResetPasswordRequest, UpdateProfileRequest,
};
use crate::model::responses::{ApiMessage, UploadResponse};
use crate::presentation::user::User;
use async_trait::async_trait;

/// Interface for the account service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Logs in and caches the returned token
    ///
    /// # Arguments
    /// * `email` - Account email
    /// * `password` - Account password
    ///
    /// # Returns
    /// * The backend answer; the token is cached only when one is present
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AppError>;

    /// Creates an account; does not log in
    async fn register(&self, request: &RegisterRequest) -> Result<ApiMessage, AppError>;

    /// Ends the session on the backend and forgets the cached token.
    ///
    /// The local token is dropped even when the backend call fails.
    async fn logout(&self) -> Result<ApiMessage, AppError>;

    /// Gets the profile of the logged in user
    async fn get_profile(&self) -> Result<User, AppError>;

    /// Updates the profile of the logged in user
    async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<User, AppError>;

    /// Uploads a new avatar; the returned URL is already normalized
    async fn upload_avatar(&self, file: FileUpload) -> Result<UploadResponse, AppError>;

    /// Changes the password of the logged in user
    async fn change_password(&self, request: &ChangePasswordRequest)
    -> Result<ApiMessage, AppError>;

    /// Asks the backend to email a reset code
    async fn forgot_password(&self, email: &str) -> Result<ApiMessage, AppError>;

    /// Sets a new password using a reset code
    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<ApiMessage, AppError>;
}
