//! Repository Implementations
//!
//! Concrete implementations of the repository traits defined in the domain
//! layer, following the dependency inversion principle.
//!
//! ## Available Repositories
//!
//! - **PgCourseRepository** - PostgreSQL-backed course storage
//! - **InMemoryCourseRepository** - map-backed storage for tests

pub mod course_repository;
pub mod memory_repository;

pub use course_repository::PgCourseRepository;
pub use memory_repository::InMemoryCourseRepository;
