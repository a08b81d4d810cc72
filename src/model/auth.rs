/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::utils::AvatarUrls;
use crate::presentation::serialization::{lenient_bool, option_string_empty_as_none};
use crate::presentation::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of the `login` action
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Plain password, sent over TLS
    pub password: String,
}

impl LoginRequest {
    /// Creates a new login body
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Response of the `login` action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    /// Whether the backend accepted the credentials
    #[serde(default, deserialize_with = "lenient_bool")]
    pub success: bool,
    /// Human readable message
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub message: Option<String>,
    /// Session token to pass on every authenticated call
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub token: Option<String>,
    /// Logged in user
    #[serde(default)]
    pub user: Option<User>,
}

impl AvatarUrls for LoginResponse {
    fn normalize_avatars(&mut self, origin: &str) {
        self.user.normalize_avatars(origin);
    }
}

/// The cached login, kept in memory and optionally persisted
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredSession {
    /// Token sent as the `token` query parameter
    pub token: String,
    /// User the token belongs to, when known
    #[serde(default)]
    pub user: Option<User>,
    /// When the token was cached
    pub saved_at: DateTime<Utc>,
}

impl StoredSession {
    /// Wraps a token obtained now
    pub fn new(token: impl Into<String>, user: Option<User>) -> Self {
        Self {
            token: token.into(),
            user,
            saved_at: Utc::now(),
        }
    }
}

impl fmt::Debug for StoredSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredSession")
            .field("token", &"***")
            .field("user", &self.user.as_ref().map(|u| u.id))
            .field("saved_at", &self.saved_at)
            .finish()
    }
}
