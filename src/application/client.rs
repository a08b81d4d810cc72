/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Client for the LMS API
//!
//! # Example
//! ```ignore
//! use lms_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! client.login("ada@example.com", "secret").await?;
//! let courses = client.get_enrolled_courses().await?;
//! ```

use crate::application::auth::{Auth, UnauthorizedHandler};
use crate::application::config::Config;
use crate::error::AppError;
use crate::model::http::{ApiRequest, HttpClient};
use crate::model::utils::AvatarUrls;
use crate::session::store::SessionStore;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Client for the LMS API
///
/// Operations are grouped in the service traits (`AccountService`,
/// `CourseService`, ...) which are all implemented on this type.
pub struct Client {
    http_client: Arc<HttpClient>,
    asset_origin: String,
}

impl Client {
    /// Creates a client using the session store described by `config`
    ///
    /// No request is sent; a persisted session is restored if present.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let store = config.session_store();
        Self::with_session_store(config, store)
    }

    /// Creates a client with an explicit session store
    pub fn with_session_store(
        config: Config,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self, AppError> {
        let asset_origin = config.asset_origin();
        let auth = Arc::new(Auth::new(store));
        let http_client = Arc::new(HttpClient::new(Arc::new(config), auth)?);
        Ok(Self {
            http_client,
            asset_origin,
        })
    }

    /// Token holder
    pub fn auth(&self) -> &Auth {
        self.http_client.auth()
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }

    /// Origin avatar URLs are rewritten to
    pub fn asset_origin(&self) -> &str {
        &self.asset_origin
    }

    /// Registers the callback fired when the backend rejects the token
    pub async fn on_unauthorized(&self, handler: Arc<dyn UnauthorizedHandler>) {
        self.auth().set_unauthorized_handler(handler).await;
    }

    /// Sends a raw request; every service method goes through here
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, AppError> {
        self.http_client.execute(request).await
    }

    /// Sends a request and rewrites avatar URLs in the answer
    pub(crate) async fn send_normalized<T>(&self, request: ApiRequest) -> Result<T, AppError>
    where
        T: DeserializeOwned + AvatarUrls,
    {
        let mut value: T = self.send(request).await?;
        value.normalize_avatars(&self.asset_origin);
        Ok(value)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config().api.base_url)
            .field("asset_origin", &self.asset_origin)
            .finish()
    }
}
