//! Course Service
//!
//! Business logic for the course catalog: input validation, date-range
//! normalization, and delegation to the storage port.
//!
//! The service owns the `start_date <= end_date` invariant. On partial
//! updates the incoming bounds are validated against the persisted record, so
//! a one-sided change can never leave a course with an inverted range.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{CourseChanges, CourseFilter, CourseRepository, NewCourse, DATE_FORMAT};
use crate::domain::entities::Course;
use crate::shared::error::AppError;

/// Course service trait
#[async_trait]
pub trait CourseService: Send + Sync {
    /// Validate and create a new course
    async fn create_course(&self, request: CreateCourseDto) -> Result<Course, CourseError>;

    /// Get a course by ID
    async fn get_course(&self, id: i64) -> Result<Course, CourseError>;

    /// List courses matching the filter, newest first
    async fn list_courses(
        &self,
        filter: &CourseFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Course>, CourseError>;

    /// Partially update a course; omitted fields are left untouched
    async fn update_course(&self, id: i64, update: UpdateCourseDto) -> Result<(), CourseError>;

    /// Delete a course
    async fn delete_course(&self, id: i64) -> Result<(), CourseError>;

    /// Count courses matching the filter, ignoring pagination
    async fn count_courses(&self, filter: &CourseFilter) -> Result<i64, CourseError>;
}

/// Create course request
#[derive(Debug, Clone)]
pub struct CreateCourseDto {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

/// Update course request. `None` leaves a field untouched; an empty date
/// string is treated the same as an omitted one.
#[derive(Debug, Clone, Default)]
pub struct UpdateCourseDto {
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Course service errors
#[derive(Debug, thiserror::Error)]
pub enum CourseError {
    #[error("name is required")]
    NameRequired,

    #[error("invalid start date format")]
    InvalidStartDate,

    #[error("invalid end date format")]
    InvalidEndDate,

    #[error("start date cannot be after end date")]
    EndBeforeStart,

    #[error("course '{0}' does not exist")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<CourseError> for AppError {
    fn from(err: CourseError) -> Self {
        match err {
            CourseError::NameRequired
            | CourseError::InvalidStartDate
            | CourseError::InvalidEndDate
            | CourseError::EndBeforeStart => AppError::Validation(err.to_string()),
            CourseError::NotFound(_) => AppError::NotFound(err.to_string()),
            CourseError::Storage(msg) => AppError::Internal(msg),
        }
    }
}

/// CourseService implementation
pub struct CourseServiceImpl<R>
where
    R: CourseRepository,
{
    repo: Arc<R>,
}

impl<R> CourseServiceImpl<R>
where
    R: CourseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    fn storage_error(err: AppError) -> CourseError {
        CourseError::Storage(err.to_string())
    }
}

fn parse_date(text: &str, invalid: CourseError) -> Result<NaiveDate, CourseError> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid)
}

/// An empty date string means "not supplied", same as an omitted field.
fn supplied(field: Option<&str>) -> Option<&str> {
    field.filter(|text| !text.is_empty())
}

#[async_trait]
impl<R> CourseService for CourseServiceImpl<R>
where
    R: CourseRepository + 'static,
{
    async fn create_course(&self, request: CreateCourseDto) -> Result<Course, CourseError> {
        if request.name.trim().is_empty() {
            return Err(CourseError::NameRequired);
        }

        let start_date = parse_date(&request.start_date, CourseError::InvalidStartDate)?;
        let end_date = parse_date(&request.end_date, CourseError::InvalidEndDate)?;

        if start_date > end_date {
            tracing::warn!(
                start = %request.start_date,
                end = %request.end_date,
                "rejected course with inverted date range"
            );
            return Err(CourseError::EndBeforeStart);
        }

        let course = self
            .repo
            .create(&NewCourse {
                name: request.name,
                start_date,
                end_date,
            })
            .await
            .map_err(Self::storage_error)?;

        tracing::info!(course_id = course.id, "course created");
        Ok(course)
    }

    async fn get_course(&self, id: i64) -> Result<Course, CourseError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(Self::storage_error)?
            .ok_or_else(|| CourseError::NotFound(id.to_string()))
    }

    async fn list_courses(
        &self,
        filter: &CourseFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Course>, CourseError> {
        self.repo
            .list(filter, offset, limit)
            .await
            .map_err(Self::storage_error)
    }

    async fn update_course(&self, id: i64, update: UpdateCourseDto) -> Result<(), CourseError> {
        // Existence is checked before any date parsing.
        let current = self.get_course(id).await?;

        let mut changes = CourseChanges {
            name: update.name,
            ..CourseChanges::default()
        };

        if let Some(text) = supplied(update.start_date.as_deref()) {
            changes.start_date = Some(parse_date(text, CourseError::InvalidStartDate)?);
        }

        if let Some(text) = supplied(update.end_date.as_deref()) {
            changes.end_date = Some(parse_date(text, CourseError::InvalidEndDate)?);
        }

        // Validate the final resulting pair: each missing side is filled from
        // the persisted record.
        let start_date = changes.start_date.unwrap_or(current.start_date);
        let end_date = changes.end_date.unwrap_or(current.end_date);
        if start_date > end_date {
            tracing::warn!(course_id = id, "rejected update with inverted date range");
            return Err(CourseError::EndBeforeStart);
        }

        self.repo
            .update(id, &changes)
            .await
            .map_err(|err| match err {
                AppError::NotFound(_) => CourseError::NotFound(id.to_string()),
                err => Self::storage_error(err),
            })?;

        tracing::info!(course_id = id, "course updated");
        Ok(())
    }

    async fn delete_course(&self, id: i64) -> Result<(), CourseError> {
        self.repo.delete(id).await.map_err(|err| match err {
            AppError::NotFound(_) => CourseError::NotFound(id.to_string()),
            err => Self::storage_error(err),
        })?;

        tracing::info!(course_id = id, "course deleted");
        Ok(())
    }

    async fn count_courses(&self, filter: &CourseFilter) -> Result<i64, CourseError> {
        self.repo.count(filter).await.map_err(Self::storage_error)
    }
}
