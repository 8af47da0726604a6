//! Course Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{
    CourseQueryParams, CreateCourseRequest, UpdateCourseRequest,
};
use crate::application::dto::response::{CourseListResponse, CourseResponse, PageMeta};
use crate::application::services::{
    CourseService, CourseServiceImpl, CreateCourseDto, UpdateCourseDto,
};
use crate::domain::CourseFilter;
use crate::infrastructure::repositories::PgCourseRepository;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

fn course_service(state: &AppState) -> CourseServiceImpl<PgCourseRepository> {
    let repo = Arc::new(PgCourseRepository::new(
        state.db.clone(),
        state.snowflake.clone(),
    ));
    CourseServiceImpl::new(repo)
}

fn parse_course_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid course ID".into()))
}

/// Create a new course
pub async fn create_course(
    State(state): State<AppState>,
    Json(body): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), AppError> {
    body.validate().map_err(validation_error)?;

    let service = course_service(&state);

    let course = service
        .create_course(CreateCourseDto {
            name: body.name,
            start_date: body.start_date,
            end_date: body.end_date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CourseResponse::from(course))))
}

/// Get course by ID
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseResponse>, AppError> {
    let course_id = parse_course_id(&course_id)?;

    let service = course_service(&state);
    let course = service.get_course(course_id).await?;

    Ok(Json(CourseResponse::from(course)))
}

/// List courses with filtering and pagination
pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseQueryParams>,
) -> Result<Json<CourseListResponse>, AppError> {
    let filter = CourseFilter::new(params.name);
    let page = params.page.unwrap_or(1).max(1);
    let per_page = params
        .limit
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    let offset = (page - 1) * per_page;

    let service = course_service(&state);

    let total = service.count_courses(&filter).await?;
    let courses = service.list_courses(&filter, offset, per_page).await?;

    Ok(Json(CourseListResponse::new(
        courses,
        PageMeta::new(total, page, per_page),
    )))
}

/// Partially update a course
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Json(body): Json<UpdateCourseRequest>,
) -> Result<StatusCode, AppError> {
    let course_id = parse_course_id(&course_id)?;

    body.validate().map_err(validation_error)?;

    let service = course_service(&state);

    service
        .update_course(
            course_id,
            UpdateCourseDto {
                name: body.name,
                start_date: body.start_date,
                end_date: body.end_date,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a course
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let course_id = parse_course_id(&course_id)?;

    let service = course_service(&state);
    service.delete_course(course_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
