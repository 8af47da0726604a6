//! Course entity and repository trait.
//!
//! Maps to the `courses` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::CourseFilter;
use crate::shared::error::AppError;

/// Calendar-date wire format used for course dates (`2024-01-31`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Represents a course offering bounded by a date range.
///
/// Maps to the `courses` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - name: VARCHAR(255) NOT NULL
/// - start_date: DATE NOT NULL
/// - end_date: DATE NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// Invariant: `start_date <= end_date` for every persisted row. The service
/// layer enforces this on every write that touches either bound; the
/// repository persists what it is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Snowflake ID (primary key), assigned by the storage layer
    pub id: i64,

    /// Course name (1-255 characters)
    pub name: String,

    /// First day of the course
    pub start_date: NaiveDate,

    /// Last day of the course
    pub end_date: NaiveDate,

    /// Creation timestamp, assigned once by storage; default listing order key
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Check whether the course is in session on the given day (inclusive).
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Course length in days, counting both endpoints.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// Payload for creating a course. The storage layer assigns `id`,
/// `created_at`, and `updated_at`.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Partial-update payload. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct CourseChanges {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Repository trait for Course data access operations.
///
/// A dumb persistence boundary: implementations apply exactly what they are
/// given and never re-check business invariants.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Persist a new course, assigning its ID and creation timestamp.
    async fn create(&self, new_course: &NewCourse) -> Result<Course, AppError>;

    /// Find a course by its Snowflake ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError>;

    /// List courses matching the filter, newest first, bounded by
    /// offset/limit. An empty page is not an error.
    async fn list(
        &self,
        filter: &CourseFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Course>, AppError>;

    /// Apply only the supplied fields to an existing course.
    /// Fails with `AppError::NotFound` when no row matches the id.
    async fn update(&self, id: i64, changes: &CourseChanges) -> Result<Course, AppError>;

    /// Hard-delete a course. Fails with `AppError::NotFound` when no row
    /// matches the id.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Count courses matching the filter, ignoring pagination.
    async fn count(&self, filter: &CourseFilter) -> Result<i64, AppError>;
}
