//! # Course Server Library
//!
//! This crate provides a course catalog CRUD API with:
//! - RESTful HTTP endpoints for course management
//! - PostgreSQL for persistent storage
//! - Date-range validation on every write
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: The Course entity, filter value object, and repository trait
//! - **Application Layer**: The CourseService and DTOs
//! - **Infrastructure Layer**: Database pool and repository implementations
//! - **Presentation Layer**: HTTP handlers, routes, and middleware
//!
//! ## Module Structure
//!
//! ```text
//! course_server/
//! +-- config/        Configuration management
//! +-- domain/        Course entity, value objects, and repository trait
//! +-- application/   CourseService and DTOs
//! +-- infrastructure/ Database and repository implementations
//! +-- presentation/  HTTP routes, handlers, and middleware
//! +-- shared/        Common utilities (errors, snowflake IDs)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business model
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers and middleware
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
