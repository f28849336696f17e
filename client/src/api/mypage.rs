//! # My Page Endpoints
//!
//! Personal dashboard: enrolled courses, wishlist, ratings, community
//! activity and profile. Every call here needs a session token.

use shared::{CourseId, EnrollmentQuery, EnrollmentStatus, ProfileUpdate, ReviewForm};

use super::client::{ApiClient, ApiResponse};
use crate::core::error::Result;

impl ApiClient {
    pub async fn get_dashboard_stats(&self) -> Result<ApiResponse> {
        self.get("/mypage/dashboard/stats/").await
    }

    /// Most recently studied course
    pub async fn get_recent_course(&self) -> Result<ApiResponse> {
        self.get("/mypage/courses/recent/").await
    }

    /// Enrolled courses, optionally filtered by status. `None` lists all.
    pub async fn get_my_courses(
        &self,
        status: Option<EnrollmentStatus>,
    ) -> Result<ApiResponse> {
        self.get_with("/mypage/courses/", &EnrollmentQuery { status })
            .await
    }

    /// Enrollment progress for one course
    pub async fn get_enrollment_status(&self, course_id: CourseId) -> Result<ApiResponse> {
        self.get(&format!("/mypage/courses/{}/status/", course_id))
            .await
    }

    pub async fn get_wishlist(&self) -> Result<ApiResponse> {
        self.get("/mypage/wishlist/").await
    }

    pub async fn add_wishlist(&self, course_id: CourseId) -> Result<ApiResponse> {
        self.post_empty(&format!("/mypage/wishlist/{}/", course_id))
            .await
    }

    pub async fn remove_wishlist(&self, course_id: CourseId) -> Result<ApiResponse> {
        self.delete(&format!("/mypage/wishlist/{}/", course_id))
            .await
    }

    /// Create or replace the current user's rating of a course
    pub async fn save_review(
        &self,
        course_id: CourseId,
        review: &ReviewForm,
    ) -> Result<ApiResponse> {
        self.post(&format!("/mypage/courses/{}/rating/", course_id), review)
            .await
    }

    pub async fn delete_review(&self, course_id: CourseId) -> Result<ApiResponse> {
        self.delete(&format!("/mypage/courses/{}/rating/", course_id))
            .await
    }

    pub async fn get_community_stats(&self) -> Result<ApiResponse> {
        self.get("/mypage/community/stats/").await
    }

    pub async fn get_my_posts(&self) -> Result<ApiResponse> {
        self.get("/mypage/community/posts/").await
    }

    pub async fn get_my_comments(&self) -> Result<ApiResponse> {
        self.get("/mypage/community/comments/").await
    }

    pub async fn get_my_scraps(&self) -> Result<ApiResponse> {
        self.get("/mypage/scraps/").await
    }

    pub async fn get_profile(&self) -> Result<ApiResponse> {
        self.get("/mypage/profile/").await
    }

    pub async fn update_profile(&self, profile: &ProfileUpdate) -> Result<ApiResponse> {
        self.put("/mypage/profile/", profile).await
    }
}
