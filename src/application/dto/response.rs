//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::entities::Course;
use crate::domain::DATE_FORMAT;

/// Course response
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id.to_string(),
            name: course.name,
            start_date: course.start_date.format(DATE_FORMAT).to_string(),
            end_date: course.end_date.format(DATE_FORMAT).to_string(),
            created_at: course.created_at.to_rfc3339(),
            updated_at: course.updated_at.to_rfc3339(),
        }
    }
}

/// Pagination metadata for list responses
#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl PageMeta {
    pub fn new(total: i64, page: i64, per_page: i64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            (total + per_page - 1) / per_page
        };
        Self {
            total,
            page,
            per_page,
            total_pages,
        }
    }
}

/// Course listing response
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub data: Vec<CourseResponse>,
    pub meta: PageMeta,
}

impl CourseListResponse {
    pub fn new(courses: Vec<Course>, meta: PageMeta) -> Self {
        Self {
            data: courses.into_iter().map(CourseResponse::from).collect(),
            meta,
        }
    }
}
