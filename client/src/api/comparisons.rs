//! # Comparison Endpoints

use shared::{ComparisonAnalyzeRequest, CourseId};

use super::client::{ApiClient, ApiResponse};
use crate::core::error::Result;

impl ApiClient {
    /// Side-by-side analysis of up to three courses against the user's
    /// preferences.
    pub async fn analyze_comparison(
        &self,
        request: &ComparisonAnalyzeRequest,
    ) -> Result<ApiResponse> {
        self.post("/comparisons/analyze/", request).await
    }

    /// Pre-generated AI evaluation of one course.
    pub async fn get_course_ai_review(&self, course_id: CourseId) -> Result<ApiResponse> {
        self.get(&format!("/comparisons/courses/{}/ai-review/", course_id))
            .await
    }
}
