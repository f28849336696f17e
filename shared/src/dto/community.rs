//! # Community Data Transfer Objects
//!
//! Defines request and response structures for boards, posts, comments,
//! likes and scraps.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Post author as embedded in posts and comments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Community board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub posts_count: u64,
}

/// Post as it appears in board listings and search results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostSummary {
    pub id: i64,
    pub author: Author,
    pub board_name: String,
    pub title: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub comments_count: u64,
}

/// Comment with its nested replies
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub author: Author,
    pub post: i64,
    #[serde(default)]
    pub parent: Option<i64>,
    pub content: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

/// `GET /community/{board}/posts/` query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
}

impl PostListParams {
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Default::default()
        }
    }
}

/// `GET /community/posts/search/` query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostSearchParams {
    pub q: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Post create/update body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    /// Only needed when moving a post to another board on update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_id: Option<i64>,
}

/// Comment create/update body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentForm {
    pub content: String,
    /// Set to reply to another comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<i64>,
}
