//! # My Page Data Transfer Objects
//!
//! Personal dashboard statistics, enrollment filters, course reviews and
//! profile updates.

use serde::{Deserialize, Serialize};

/// Enrollment filter for `GET /mypage/courses/?status=`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Enrolled,
    Completed,
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentStatus::Enrolled => "enrolled",
            EnrollmentStatus::Completed => "completed",
        }
    }
}

/// Query wrapper so the status lands under the `status` key.
/// Without a status the backend lists every enrollment.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct EnrollmentQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EnrollmentStatus>,
}

/// Course rating create/update body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewForm {
    /// 1 to 5
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_text: Option<String>,
}

/// Profile update body; unset fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_opt_in: Option<bool>,
}

/// `GET /mypage/dashboard/stats/` response
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub enrolled_count: u64,
    pub completed_count: u64,
    pub wishlist_count: u64,
    pub my_review_count: u64,
}

/// `GET /mypage/community/stats/` response
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommunityStats {
    pub post_count: u64,
    pub comment_count: u64,
    pub scrap_count: u64,
    pub received_likes_count: u64,
}
