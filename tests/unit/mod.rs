mod common;
mod test_account;
mod test_courses;
mod test_error;
mod test_reviews;
mod test_session;
