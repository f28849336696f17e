//! # Course Data Transfer Objects
//!
//! Query parameter sets for the course list and the two search endpoints,
//! plus the shapes the catalog returns.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Course identifier as issued by the backend
pub type CourseId = i64;

/// Sort orders accepted by the course list (`ordering` query parameter)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum CourseOrdering {
    #[default]
    #[serde(rename = "-average_rating")]
    RatingDesc,
    #[serde(rename = "average_rating")]
    RatingAsc,
    #[serde(rename = "-created_at")]
    Newest,
    #[serde(rename = "created_at")]
    Oldest,
    #[serde(rename = "name")]
    NameAsc,
    #[serde(rename = "-name")]
    NameDesc,
    #[serde(rename = "-review_count")]
    MostReviewed,
}

/// Filters shared by the list and both search endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseFilters {
    /// Top-level category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classfy_name: Option<String>,
    /// Sub category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_classfy_name: Option<String>,
    /// Operating institution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professor: Option<String>,
}

/// `GET /courses/` query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(flatten)]
    pub filters: CourseFilters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<CourseOrdering>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// `GET /courses/search/keyword/` query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeywordSearchParams {
    pub search: String,
    #[serde(flatten)]
    pub filters: CourseFilters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// `GET /courses/search/semantic/` query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SemanticSearchParams {
    pub query: String,
    #[serde(flatten)]
    pub filters: CourseFilters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Course as it appears in lists and search results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseSummary {
    pub id: CourseId,
    pub name: String,
    #[serde(default)]
    pub professor: Option<String>,
    #[serde(default)]
    pub org_name: Option<String>,
    #[serde(default)]
    pub classfy_name: Option<String>,
    #[serde(default)]
    pub middle_classfy_name: Option<String>,
    #[serde(default)]
    pub course_image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u64>,
    #[serde(default)]
    pub study_start: Option<String>,
    #[serde(default)]
    pub study_end: Option<String>,
}

/// Course review as listed under a course
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseReview {
    pub id: i64,
    pub user_name: String,
    pub rating: f64,
    #[serde(default)]
    pub review_text: Option<String>,
    pub created_at: DateTime<FixedOffset>,
}

/// Summary body of the AI review digest
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewContent {
    pub summary: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

/// `GET /comparisons/courses/{id}/review-summary/` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewSummary {
    pub course_id: CourseId,
    pub review_summary: ReviewContent,
    pub review_count: u64,
    /// `high` or `low`
    pub reliability: String,
    #[serde(default)]
    pub warning_message: Option<String>,
}
