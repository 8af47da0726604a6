//! Course listing filter.
//!
//! An immutable query predicate applied identically by list and count.

use crate::domain::entities::Course;

/// Filter for course list/count operations.
///
/// Currently a single optional name predicate: case-insensitive substring
/// match. An empty string is normalized to "no filter" at construction time,
/// so `name` is always `None` or a non-empty needle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    name: Option<String>,
}

impl CourseFilter {
    /// Build a filter from an optional name fragment. Empty and
    /// whitespace-only fragments mean "no filter".
    pub fn new(name: Option<String>) -> Self {
        Self {
            name: name.filter(|n| !n.trim().is_empty()),
        }
    }

    /// Filter by a name fragment.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self::new(Some(name.into()))
    }

    /// The name needle, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// True when the filter matches everything.
    pub fn is_unfiltered(&self) -> bool {
        self.name.is_none()
    }

    /// Evaluate the predicate against a course. Used by the in-memory
    /// repository; the SQL repository expresses the same predicate as ILIKE.
    pub fn matches(&self, course: &Course) -> bool {
        match &self.name {
            Some(needle) => course.name.to_lowercase().contains(&needle.to_lowercase()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn course_named(name: &str) -> Course {
        let now = Utc::now();
        Course {
            id: 1,
            name: name.to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_unfiltered_matches_everything() {
        let filter = CourseFilter::new(None);
        assert!(filter.is_unfiltered());
        assert!(filter.matches(&course_named("Algebra I")));
        assert!(filter.matches(&course_named("")));
    }

    #[test]
    fn test_empty_string_normalizes_to_unfiltered() {
        assert!(CourseFilter::new(Some(String::new())).is_unfiltered());
        assert!(CourseFilter::new(Some("   ".to_string())).is_unfiltered());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let filter = CourseFilter::by_name("ALGO");
        assert!(filter.matches(&course_named("Intro to algorithms")));
        assert!(filter.matches(&course_named("ALGORITHMS II")));
    }

    #[test]
    fn test_match_is_substring_not_prefix() {
        let filter = CourseFilter::by_name("bra");
        assert!(filter.matches(&course_named("Algebra I")));
        assert!(!filter.matches(&course_named("Geometry")));
    }

    #[test]
    fn test_name_accessor_exposes_needle() {
        let filter = CourseFilter::by_name("algo");
        assert_eq!(filter.name(), Some("algo"));
        assert_eq!(CourseFilter::default().name(), None);
    }
}
