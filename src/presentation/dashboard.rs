/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::presentation::serialization::{
    option_string_empty_as_none, string_or_f64_opt, string_or_u64, string_or_u64_opt,
};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Counters shown on the user's dashboard.
///
/// Learners get the enrollment counters, instructors additionally get the
/// authoring and revenue counters; fields that do not apply are `None`.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardStats {
    /// Courses the user is enrolled in
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub enrolled_courses: Option<u64>,
    /// Courses finished
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub completed_courses: Option<u64>,
    /// Certificates earned
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub certificates: Option<u64>,
    /// Courses authored
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub total_courses: Option<u64>,
    /// Students across authored courses
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub total_students: Option<u64>,
    /// Reviews across authored courses
    #[serde(default, deserialize_with = "string_or_u64_opt")]
    pub total_reviews: Option<u64>,
    /// Average rating across authored courses
    #[serde(default, deserialize_with = "string_or_f64_opt")]
    pub average_rating: Option<f64>,
    /// Revenue across authored courses
    #[serde(default, deserialize_with = "string_or_f64_opt")]
    pub total_revenue: Option<f64>,
}

/// Completion certificate for a course
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Certificate {
    /// Certificate id
    #[serde(deserialize_with = "string_or_u64")]
    pub id: u64,
    /// Course id
    #[serde(deserialize_with = "string_or_u64")]
    pub course_id: u64,
    /// Course title
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub course_title: Option<String>,
    /// Learner name printed on the certificate
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub user_name: Option<String>,
    /// Public verification code
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub certificate_code: Option<String>,
    /// Download URL of the rendered certificate
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub url: Option<String>,
    /// Issue timestamp as sent by the backend
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub issued_at: Option<String>,
}
