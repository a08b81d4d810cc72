/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::utils::{AvatarUrls, normalize_avatar_url};
use crate::presentation::serialization::{
    lenient_enum, option_string_empty_as_none, string_or_u64,
};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Role of a platform user
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular learner
    #[default]
    Student,
    /// Course author
    Instructor,
    /// Platform administrator
    Admin,
}

/// A platform user as returned by the profile and login actions
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct User {
    /// Unique identifier
    #[serde(deserialize_with = "string_or_u64")]
    pub id: u64,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Role on the platform
    #[serde(default, deserialize_with = "lenient_enum")]
    pub role: UserRole,
    /// Avatar URL, normalized to the configured asset origin
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub avatar: Option<String>,
    /// Free text biography
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub bio: Option<String>,
    /// Phone number
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub phone: Option<String>,
    /// Registration timestamp as sent by the backend
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub created_at: Option<String>,
}

impl User {
    /// Whether the user can author courses
    #[must_use]
    pub fn is_instructor(&self) -> bool {
        matches!(self.role, UserRole::Instructor | UserRole::Admin)
    }
}

impl AvatarUrls for User {
    fn normalize_avatars(&mut self, origin: &str) {
        self.avatar = self
            .avatar
            .as_deref()
            .and_then(|raw| normalize_avatar_url(raw, origin));
    }
}
