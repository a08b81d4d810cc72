/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::utils::{AvatarUrls, normalize_avatar_url};
use crate::presentation::serialization::{
    option_string_empty_as_none, string_or_u64, string_or_u64_opt,
};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A learner's review of a course
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Review {
    /// Unique identifier
    #[serde(deserialize_with = "string_or_u64")]
    pub id: u64,
    /// Reviewed course
    #[serde(deserialize_with = "string_or_u64")]
    pub course_id: u64,
    /// Author id
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub user_id: Option<u64>,
    /// Author display name
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub user_name: Option<String>,
    /// Author avatar
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub user_avatar: Option<String>,
    /// Star rating, 1 to 5
    #[serde(deserialize_with = "string_or_u64")]
    pub rating: u64,
    /// Free text comment
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub comment: Option<String>,
    /// Creation timestamp as sent by the backend
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub created_at: Option<String>,
}

impl AvatarUrls for Review {
    fn normalize_avatars(&mut self, origin: &str) {
        self.user_avatar = self
            .user_avatar
            .as_deref()
            .and_then(|raw| normalize_avatar_url(raw, origin));
    }
}
