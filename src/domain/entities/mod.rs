//! # Domain Entities
//!
//! Core domain entities for the course catalog. Each entity maps directly to
//! its database table and carries the repository trait defining its data
//! access contract, implemented in the infrastructure layer.

mod course;

pub use course::{Course, CourseChanges, CourseRepository, NewCourse, DATE_FORMAT};
