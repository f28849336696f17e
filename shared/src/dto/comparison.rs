//! # Comparison Data Transfer Objects
//!
//! Request body for the side-by-side course analysis endpoint.

use serde::{Deserialize, Serialize};

use super::course::CourseId;

/// How much the user cares about each factor, 0 to 5
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPreferences {
    pub theory: u8,
    pub practical: u8,
    pub difficulty: u8,
    pub duration: u8,
}

/// `POST /comparisons/analyze/` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComparisonAnalyzeRequest {
    /// One to three courses
    pub course_ids: Vec<CourseId>,
    /// Study hours available per week, 1 to 168
    pub weekly_hours: u32,
    pub user_preferences: UserPreferences,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_goal: Option<String>,
}
