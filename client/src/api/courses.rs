//! # Course Endpoints
//!
//! Catalog listing, detail, reviews, AI recommendations, the AI review
//! digest and the two search flavours.

use shared::{CourseId, CourseListParams, KeywordSearchParams, SemanticSearchParams};

use super::client::{ApiClient, ApiResponse};
use crate::core::error::Result;

impl ApiClient {
    /// Search, filter, sort and paginate the catalog.
    pub async fn get_course_list(&self, params: &CourseListParams) -> Result<ApiResponse> {
        self.get_with("/courses/", params).await
    }

    pub async fn get_course_detail(&self, course_id: CourseId) -> Result<ApiResponse> {
        self.get(&format!("/courses/{}/", course_id)).await
    }

    pub async fn get_course_reviews(&self, course_id: CourseId) -> Result<ApiResponse> {
        self.get(&format!("/courses/{}/reviews/", course_id)).await
    }

    /// Courses similar to the given one.
    pub async fn get_recommended_courses(&self, course_id: CourseId) -> Result<ApiResponse> {
        self.get(&format!("/courses/{}/recommendations/", course_id))
            .await
    }

    /// AI-generated digest of a course's reviews. Lives under `/comparisons/`.
    pub async fn get_review_summary(&self, course_id: CourseId) -> Result<ApiResponse> {
        self.get(&format!("/comparisons/courses/{}/review-summary/", course_id))
            .await
    }

    /// Keyword search with fuzzy matching.
    pub async fn search_keyword_courses(
        &self,
        params: &KeywordSearchParams,
    ) -> Result<ApiResponse> {
        self.get_with("/courses/search/keyword/", params).await
    }

    /// Meaning-based search.
    pub async fn search_semantic_courses(
        &self,
        params: &SemanticSearchParams,
    ) -> Result<ApiResponse> {
        self.get_with("/courses/search/semantic/", params).await
    }
}
