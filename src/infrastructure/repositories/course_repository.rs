//! Course Repository Implementation
//!
//! PostgreSQL implementation of the CourseRepository trait.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::domain::{Course, CourseChanges, CourseFilter, CourseRepository, NewCourse};
use crate::shared::error::AppError;
use crate::shared::snowflake::SnowflakeGenerator;

/// Database row representation matching the `courses` table schema.
#[derive(Debug, sqlx::FromRow)]
struct CourseRow {
    id: i64,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CourseRow {
    /// Convert database row to domain Course entity.
    fn into_course(self) -> Course {
        Course {
            id: self.id,
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// PostgreSQL course repository implementation.
///
/// Owns ID assignment: every created course gets a snowflake ID here, while
/// `created_at`/`updated_at` come from the database defaults.
#[derive(Clone)]
pub struct PgCourseRepository {
    pool: PgPool,
    id_generator: Arc<SnowflakeGenerator>,
}

impl PgCourseRepository {
    /// Create a new PgCourseRepository with the given connection pool.
    pub fn new(pool: PgPool, id_generator: Arc<SnowflakeGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    /// Persist a new course, assigning its ID and creation timestamp.
    async fn create(&self, new_course: &NewCourse) -> Result<Course, AppError> {
        let id = self.id_generator.generate();

        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            INSERT INTO courses (id, name, start_date, end_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, start_date, end_date, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&new_course.name)
        .bind(new_course.start_date)
        .bind(new_course.end_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Course with this ID already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.into_course())
    }

    /// Find a course by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, name, start_date, end_date, created_at, updated_at
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_course()))
    }

    /// List courses matching the filter, newest first.
    /// Ties on created_at are broken by id, newest insert first.
    async fn list(
        &self,
        filter: &CourseFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Course>, AppError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, name, start_date, end_date, created_at, updated_at
            FROM courses
            WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%')
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(filter.name())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_course()).collect())
    }

    /// Apply only the supplied fields to an existing course.
    async fn update(&self, id: i64, changes: &CourseChanges) -> Result<Course, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            UPDATE courses
            SET name = COALESCE($2, name),
                start_date = COALESCE($3, start_date),
                end_date = COALESCE($4, end_date),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, start_date, end_date, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(changes.start_date)
        .bind(changes.end_date)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Course with id {} not found", id)))?;

        Ok(row.into_course())
    }

    /// Delete a course.
    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Course with id {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Count courses matching the filter, ignoring pagination.
    async fn count(&self, filter: &CourseFilter) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM courses
            WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%')
            "#,
        )
        .bind(filter.name())
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
