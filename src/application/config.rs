use crate::constants::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::model::utils::origin_of;
use crate::session::store::{FileSessionStore, MemorySessionStore, SessionStore};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration of the backend endpoint
pub struct ApiConfig {
    /// Full URL of the endpoint script, e.g. `https://school.example.com/api.php`
    pub base_url: String,
    /// Timeout in seconds for each request
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the LMS API client
pub struct Config {
    /// Endpoint configuration
    pub api: ApiConfig,
    /// Origin avatar URLs are rewritten to; derived from `api.base_url` when unset
    pub asset_origin: Option<String>,
    /// File the login is persisted to; in-memory only when unset
    pub session_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment and an optional `.env` file
    ///
    /// | variable | default |
    /// |---|---|
    /// | `LMS_API_URL` | `http://localhost/api.php` |
    /// | `LMS_API_TIMEOUT` | `30` |
    /// | `LMS_ASSET_ORIGIN` | origin of `LMS_API_URL` |
    /// | `LMS_SESSION_FILE` | none (in-memory session) |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("LMS_API_URL", String::from(DEFAULT_API_URL));
        if base_url == DEFAULT_API_URL {
            warn!("LMS_API_URL not set, using {}", DEFAULT_API_URL);
        }

        Config {
            api: ApiConfig {
                base_url,
                timeout: get_env_or_default("LMS_API_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            asset_origin: get_env_or_none("LMS_ASSET_ORIGIN"),
            session_file: get_env_or_none::<String>("LMS_SESSION_FILE").map(PathBuf::from),
        }
    }

    /// Configuration for a given endpoint with defaults elsewhere, ignoring the environment
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            api: ApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            asset_origin: None,
            session_file: None,
        }
    }

    /// Set the avatar origin
    pub fn with_asset_origin(mut self, origin: impl Into<String>) -> Self {
        self.asset_origin = Some(origin.into());
        self
    }

    /// Set the session file
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.api.timeout = timeout;
        self
    }

    /// Origin used for avatar URLs
    ///
    /// Falls back to the origin of the endpoint, then to an empty string which
    /// leaves avatar paths host-relative.
    pub fn asset_origin(&self) -> String {
        self.asset_origin
            .clone()
            .or_else(|| origin_of(&self.api.base_url))
            .unwrap_or_default()
    }

    /// Session store matching `session_file`
    pub fn session_store(&self) -> Arc<dyn SessionStore> {
        match &self.session_file {
            Some(path) => Arc::new(FileSessionStore::new(path.clone())),
            None => Arc::new(MemorySessionStore::new()),
        }
    }
}
