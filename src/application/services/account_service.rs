/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::services::AccountService;
use crate::constants::AVATAR_FIELD;
use crate::error::AppError;
use crate::model::auth::{LoginRequest, LoginResponse, StoredSession};
use crate::model::http::{ApiRequest, FileUpload};
use crate::model::requests::{
    ChangePasswordRequest, ForgotPasswordRequest, RegisterRequest, ResetPasswordRequest,
    UpdateProfileRequest,
};
use crate::model::responses::{ApiMessage, UploadResponse};
use crate::presentation::user::User;
use async_trait::async_trait;
use tracing::{debug, info, warn};

impl Client {
    /// Keeps the user cached next to the token in sync with the backend
    async fn remember_user(&self, user: &User) {
        if let Err(e) = self.auth().set_user(user.clone()).await {
            warn!("Could not persist user {}: {}", user.id, e);
        }
    }
}

#[async_trait]
impl AccountService for Client {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AppError> {
        info!("Logging in as {}", email);
        let request = ApiRequest::post("login")
            .public()
            .json(&LoginRequest::new(email, password))?;
        let response: LoginResponse = self.send_normalized(request).await?;

        match response.token.as_deref() {
            Some(token) => {
                let session = StoredSession::new(token, response.user.clone());
                if let Err(e) = self.auth().set_session(session).await {
                    warn!("Logged in but could not persist the session: {}", e);
                }
                debug!("Token cached for {}", email);
            }
            None => warn!(
                "Login for {} returned no token: {}",
                email,
                response.message.as_deref().unwrap_or("no message")
            ),
        }
        Ok(response)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<ApiMessage, AppError> {
        info!("Registering {}", request.email);
        let request = ApiRequest::post("register").public().json(request)?;
        self.send(request).await
    }

    async fn logout(&self) -> Result<ApiMessage, AppError> {
        info!("Logging out");
        let result = self.send(ApiRequest::post("logout")).await;
        if let Err(e) = self.auth().clear().await {
            warn!("Could not clear persisted session: {}", e);
        }
        result
    }

    async fn get_profile(&self) -> Result<User, AppError> {
        debug!("Getting profile");
        let user: User = self.send_normalized(ApiRequest::get("get_profile")).await?;
        self.remember_user(&user).await;
        Ok(user)
    }

    async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<User, AppError> {
        info!("Updating profile");
        let request = ApiRequest::post("update_profile").json(request)?;
        let user: User = self.send_normalized(request).await?;
        self.remember_user(&user).await;
        Ok(user)
    }

    async fn upload_avatar(&self, file: FileUpload) -> Result<UploadResponse, AppError> {
        info!("Uploading avatar {}", file.file_name);
        let request = ApiRequest::post("upload_avatar").file(AVATAR_FIELD, file);
        let response: UploadResponse = self.send_normalized(request).await?;

        if let (Some(url), Some(mut user)) = (response.url.clone(), self.auth().current_user().await)
        {
            user.avatar = Some(url);
            self.remember_user(&user).await;
        }
        Ok(response)
    }

    async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<ApiMessage, AppError> {
        info!("Changing password");
        let request = ApiRequest::post("change_password").json(request)?;
        self.send(request).await
    }

    async fn forgot_password(&self, email: &str) -> Result<ApiMessage, AppError> {
        info!("Requesting password reset for {}", email);
        let body = ForgotPasswordRequest {
            email: email.to_string(),
        };
        let request = ApiRequest::post("forgot_password").public().json(&body)?;
        self.send(request).await
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<ApiMessage, AppError> {
        info!("Resetting password for {}", request.email);
        let request = ApiRequest::post("reset_password").public().json(request)?;
        self.send(request).await
    }
}
