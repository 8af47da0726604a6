//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::Deserialize;
use validator::Validate;

/// Create course request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Calendar date, `YYYY-MM-DD`
    pub start_date: String,

    /// Calendar date, `YYYY-MM-DD`
    pub end_date: String,
}

/// Update course request. Omitted fields are left untouched; an empty date
/// string is treated the same as an omitted one.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,

    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Course listing query parameters
#[derive(Debug, Deserialize)]
pub struct CourseQueryParams {
    /// Case-insensitive substring match on the course name
    pub name: Option<String>,

    /// 1-based page number
    pub page: Option<i64>,

    /// Page size
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_empty_name() {
        let request = CreateCourseRequest {
            name: String::new(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-05-01".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_deserializes_missing_fields_as_none() {
        let request: UpdateCourseRequest =
            serde_json::from_str(r#"{"name":"Algebra II"}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("Algebra II"));
        assert!(request.start_date.is_none());
        assert!(request.end_date.is_none());
    }
}
