/// Account operations implemented on `Client`
pub mod account_service;
/// Course operations implemented on `Client`
pub mod course_service;
/// Dashboard operations implemented on `Client`
pub mod dashboard_service;
/// Enrollment operations implemented on `Client`
pub mod enrollment_service;
/// Lesson operations implemented on `Client`
pub mod lesson_service;
/// Quiz operations implemented on `Client`
pub mod quiz_service;
/// Review operations implemented on `Client`
pub mod review_service;

pub use crate::application::interfaces::account::*;
pub use crate::application::interfaces::course::*;
pub use crate::application::interfaces::dashboard::*;
pub use crate::application::interfaces::enrollment::*;
pub use crate::application::interfaces::lesson::*;
pub use crate::application::interfaces::quiz::*;
pub use crate::application::interfaces::review::*;
