/// Certificates, dashboard counters and other aggregate views
pub mod dashboard;
/// Course catalog models
pub mod course;
/// Enrollment and progress models
pub mod enrollment;
/// Lesson models
pub mod lesson;
/// Quiz, question and result models
pub mod quiz;
/// Course review models
pub mod review;
/// Serialization utilities for API responses
pub mod serialization;
/// User and profile models
pub mod user;

pub use course::*;
pub use dashboard::*;
pub use enrollment::*;
pub use lesson::*;
pub use quiz::*;
pub use review::*;
pub use user::*;
