/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Request building and dispatch against the single backend endpoint.
//!
//! Every backend operation is an [`ApiRequest`]: an HTTP method, an `action`
//! query parameter, extra query parameters, an optional JSON or multipart
//! body and an [`AuthMode`]. [`HttpClient::execute`] resolves the token,
//! builds the URL, sends the request and decodes the JSON answer.

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::constants::{ACTION_PARAM, REDACTED, TOKEN_PARAM, USER_AGENT};
use crate::error::AppError;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// How an operation uses the cached token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// The call is rejected locally when no token is cached
    Required,
    /// The token is attached when one is cached
    Optional,
    /// The token is never attached
    Public,
}

/// A file sent in a multipart body
#[derive(Clone, PartialEq)]
pub struct FileUpload {
    /// File name reported to the backend
    pub file_name: String,
    /// MIME type, e.g. `image/png`
    pub mime_type: Option<String>,
    /// File contents
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl FileUpload {
    /// Wraps in-memory contents; the MIME type is guessed from the extension
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = guess_mime(&file_name).map(str::to_string);
        Self {
            file_name,
            mime_type,
            bytes,
        }
    }

    /// Overrides the MIME type
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Reads a file from disk
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::InvalidInput(format!("no file name in {}", path.display())))?;
        Ok(Self::new(file_name, bytes))
    }

    fn into_part(self) -> Result<Part, AppError> {
        let part = Part::bytes(self.bytes).file_name(self.file_name);
        match self.mime_type {
            Some(mime) => part
                .mime_str(&mime)
                .map_err(|e| AppError::InvalidInput(format!("invalid mime type {mime}: {e}"))),
            None => Ok(part),
        }
    }
}

fn guess_mime(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "pdf" => "application/pdf",
        _ => return None,
    };
    Some(mime)
}

/// One field of a multipart body
#[derive(Debug, Clone, PartialEq)]
pub enum MultipartField {
    /// Plain text field
    Text {
        /// Field name
        name: String,
        /// Field value
        value: String,
    },
    /// File field
    File {
        /// Field name
        name: String,
        /// File to send
        file: FileUpload,
    },
}

/// Body of an [`ApiRequest`]
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// `application/json` body
    Json(Value),
    /// `multipart/form-data` body
    Multipart(Vec<MultipartField>),
}

/// Description of one call to the backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Value of the `action` query parameter
    pub action: String,
    /// Extra query parameters, in order
    pub params: Vec<(String, String)>,
    /// Request body
    pub body: RequestBody,
    /// Token policy
    pub auth: AuthMode,
}

impl ApiRequest {
    /// Creates an authenticated request for `action`
    pub fn new(method: Method, action: impl Into<String>) -> Self {
        Self {
            method,
            action: action.into(),
            params: Vec::new(),
            body: RequestBody::Empty,
            auth: AuthMode::Required,
        }
    }

    /// Authenticated GET
    pub fn get(action: impl Into<String>) -> Self {
        Self::new(Method::GET, action)
    }

    /// Authenticated POST
    pub fn post(action: impl Into<String>) -> Self {
        Self::new(Method::POST, action)
    }

    /// Never attach the token
    pub fn public(mut self) -> Self {
        self.auth = AuthMode::Public;
        self
    }

    /// Attach the token only when one is cached
    pub fn optional_auth(mut self) -> Self {
        self.auth = AuthMode::Optional;
        self
    }

    /// Appends a query parameter
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((name.into(), value.to_string()));
        self
    }

    /// Appends several query parameters
    pub fn params<K: Into<String>, V: ToString>(
        mut self,
        params: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.to_string())));
        self
    }

    /// Sets a JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, AppError> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Sets a multipart body with a single file field
    pub fn file(mut self, name: impl Into<String>, file: FileUpload) -> Self {
        self.body = RequestBody::Multipart(vec![MultipartField::File {
            name: name.into(),
            file,
        }]);
        self
    }

    /// Builds the full URL: base endpoint, `action`, extra params, then `token`
    pub fn build_url(&self, base_url: &str, token: Option<&str>) -> Result<Url, AppError> {
        let mut url = Url::parse(base_url)
            .map_err(|e| AppError::InvalidInput(format!("invalid base url {base_url}: {e}")))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair(ACTION_PARAM, &self.action);
            for (name, value) in &self.params {
                query.append_pair(name, value);
            }
            if let Some(token) = token {
                query.append_pair(TOKEN_PARAM, token);
            }
        }
        Ok(url)
    }
}

/// Shared HTTP client bound to one backend endpoint and one token holder
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
    auth: Arc<Auth>,
}

impl HttpClient {
    /// Creates the client; no request is sent
    pub fn new(config: Arc<Config>, auth: Arc<Auth>) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.api.timeout))
            .build()?;
        Ok(Self {
            http_client,
            config,
            auth,
        })
    }

    /// Token holder used by this client
    pub fn auth(&self) -> &Arc<Auth> {
        &self.auth
    }

    /// Configuration used by this client
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Resolves the token for `request.auth`
    async fn resolve_token(&self, mode: AuthMode) -> Result<Option<String>, AppError> {
        match mode {
            AuthMode::Required => self.auth.require_token().await.map(Some),
            AuthMode::Optional => Ok(self.auth.token().await),
            AuthMode::Public => Ok(None),
        }
    }

    /// Sends `request` and decodes the JSON response into `T`
    ///
    /// # Errors
    /// * `AppError::NotAuthenticated` - token required but none cached; nothing is sent
    /// * `AppError::Unauthorized` - backend answered 401; the session is dropped
    /// * `AppError::Api` - any other non-success status, body untouched
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, AppError> {
        let token = self.resolve_token(request.auth).await?;
        let base_url = &self.config.api.base_url;
        let url = request.build_url(base_url, token.as_deref())?;

        if tracing::enabled!(tracing::Level::DEBUG) {
            let shown = request.build_url(base_url, token.as_ref().map(|_| REDACTED))?;
            debug!("{} {}", request.method, shown);
        }

        let mut builder = self
            .http_client
            .request(request.method, url)
            .header(ACCEPT, "application/json");

        match request.body {
            RequestBody::Empty => {}
            RequestBody::Json(value) => builder = builder.json(&value),
            RequestBody::Multipart(fields) => builder = builder.multipart(build_form(fields)?),
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED {
            warn!("Backend rejected the token for action {}", request.action);
            self.auth.handle_unauthorized().await;
            return Err(AppError::Unauthorized);
        }

        let body = response.text().await?;
        if !status.is_success() {
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::Api { status, body });
        }

        parse_body(&body)
    }
}

fn build_form(fields: Vec<MultipartField>) -> Result<Form, AppError> {
    let mut form = Form::new();
    for field in fields {
        form = match field {
            MultipartField::Text { name, value } => form.text(name, value),
            MultipartField::File { name, file } => form.part(name, file.into_part()?),
        };
    }
    Ok(form)
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| {
        let snippet: String = body.chars().take(200).collect();
        AppError::Deserialization(format!("{e}; body: {snippet}"))
    })
}
