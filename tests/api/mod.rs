//! REST API endpoint tests

mod course_tests;
mod health_tests;
