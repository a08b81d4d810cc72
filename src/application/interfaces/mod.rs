/// Login, registration and profile operations
pub mod account;
/// Course catalog and authoring operations
pub mod course;
/// Dashboard counters
pub mod dashboard;
/// Enrollment and progress operations
pub mod enrollment;
/// Lesson operations
pub mod lesson;
/// Quiz operations
pub mod quiz;
/// Review operations
pub mod review;
