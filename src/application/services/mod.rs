//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **CourseService**: Course CRUD with date-range validation

pub mod course_service;

// Re-export course service types
pub use course_service::{
    CourseError, CourseService, CourseServiceImpl, CreateCourseDto, UpdateCourseDto,
};
