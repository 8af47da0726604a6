//! In-Memory Course Repository
//!
//! Map-backed implementation of the CourseRepository trait, used by the
//! service unit tests and handy for local experiments without a database.
//! Mirrors the SQL repository's contract exactly: same ordering, same
//! not-found semantics, same filter predicate.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::{Course, CourseChanges, CourseFilter, CourseRepository, NewCourse};
use crate::shared::error::AppError;

/// In-memory course store guarded by a read-write lock.
///
/// Sequential IDs keep listings deterministic: the created_at tie-break
/// (`id DESC`) reduces to reverse insertion order, matching the snowflake
/// behavior of the SQL repository.
pub struct InMemoryCourseRepository {
    courses: RwLock<HashMap<i64, Course>>,
    next_id: AtomicI64,
}

impl Default for InMemoryCourseRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self {
            courses: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn not_found(id: i64) -> AppError {
        AppError::NotFound(format!("Course with id {} not found", id))
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn create(&self, new_course: &NewCourse) -> Result<Course, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();

        let course = Course {
            id,
            name: new_course.name.clone(),
            start_date: new_course.start_date,
            end_date: new_course.end_date,
            created_at: now,
            updated_at: now,
        };

        self.courses.write().insert(id, course.clone());
        Ok(course)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        Ok(self.courses.read().get(&id).cloned())
    }

    async fn list(
        &self,
        filter: &CourseFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Course>, AppError> {
        let mut matching: Vec<Course> = self
            .courses
            .read()
            .values()
            .filter(|course| filter.matches(course))
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(matching
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn update(&self, id: i64, changes: &CourseChanges) -> Result<Course, AppError> {
        let mut courses = self.courses.write();
        let course = courses.get_mut(&id).ok_or_else(|| Self::not_found(id))?;

        if let Some(name) = &changes.name {
            course.name = name.clone();
        }
        if let Some(start_date) = changes.start_date {
            course.start_date = start_date;
        }
        if let Some(end_date) = changes.end_date {
            course.end_date = end_date;
        }
        course.updated_at = Utc::now();

        Ok(course.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.courses
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }

    async fn count(&self, filter: &CourseFilter) -> Result<i64, AppError> {
        let count = self
            .courses
            .read()
            .values()
            .filter(|course| filter.matches(course))
            .count();
        Ok(count as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn new_course(name: &str) -> NewCourse {
        NewCourse {
            name: name.to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryCourseRepository::new();
        let first = repo.create(&new_course("A")).await.unwrap();
        let second = repo.create(&new_course("B")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_list_orders_newest_first_with_id_tiebreak() {
        let repo = InMemoryCourseRepository::new();
        for name in ["A", "B", "C"] {
            repo.create(&new_course(name)).await.unwrap();
        }

        let courses = repo
            .list(&CourseFilter::default(), 0, 10)
            .await
            .unwrap();

        let names: Vec<&str> = courses.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[tokio::test]
    async fn test_list_applies_offset_then_limit() {
        let repo = InMemoryCourseRepository::new();
        for name in ["A", "B", "C", "D"] {
            repo.create(&new_course(name)).await.unwrap();
        }

        let page = repo.list(&CourseFilter::default(), 1, 2).await.unwrap();

        let names: Vec<&str> = page.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B"]);
    }

    #[tokio::test]
    async fn test_list_empty_result_is_not_an_error() {
        let repo = InMemoryCourseRepository::new();
        let courses = repo
            .list(&CourseFilter::by_name("missing"), 0, 10)
            .await
            .unwrap();
        assert!(courses.is_empty());
    }

    #[tokio::test]
    async fn test_update_applies_only_supplied_fields() {
        let repo = InMemoryCourseRepository::new();
        let created = repo.create(&new_course("A")).await.unwrap();

        let updated = repo
            .update(
                created.id,
                &CourseChanges {
                    name: Some("Renamed".to_string()),
                    ..CourseChanges::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.start_date, created.start_date);
        assert_eq!(updated.end_date, created.end_date);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let repo = InMemoryCourseRepository::new();
        let result = repo.update(42, &CourseChanges::default()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_not_found() {
        let repo = InMemoryCourseRepository::new();
        let result = repo.delete(42).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_count_ignores_pagination() {
        let repo = InMemoryCourseRepository::new();
        for name in ["Algebra I", "Algebra II", "Geometry"] {
            repo.create(&new_course(name)).await.unwrap();
        }

        let filter = CourseFilter::by_name("algebra");
        assert_eq!(repo.count(&filter).await.unwrap(), 2);
        assert_eq!(repo.count(&CourseFilter::default()).await.unwrap(), 3);
    }
}
