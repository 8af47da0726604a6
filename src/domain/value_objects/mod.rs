//! # Value Objects
//!
//! Immutable value types used across the domain.

mod filter;

pub use filter::CourseFilter;
