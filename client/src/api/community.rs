//! # Community API Client
//!
//! HTTP client methods for boards, posts, comments, likes and scraps.

use std::fmt::Display;

use shared::{CommentForm, PostForm, PostListParams, PostSearchParams};

use super::client::{segment, ApiClient, ApiResponse};
use crate::core::error::Result;

impl ApiClient {
    /// Get all boards with their post counts
    pub async fn get_boards(&self) -> Result<ApiResponse> {
        self.get("/community/boards/").await
    }

    /// Get posts of a board by its id
    ///
    /// The backend serves ids and names from the same path shape, so any
    /// displayable key works here.
    pub async fn get_posts_by_board_id(
        &self,
        board_id: impl Display,
        params: &PostListParams,
    ) -> Result<ApiResponse> {
        self.get_with(&format!("/community/{}/posts/", segment(board_id)), params)
            .await
    }

    /// Get posts of a board by its name
    pub async fn get_posts_by_board_name(
        &self,
        board_name: &str,
        params: &PostListParams,
    ) -> Result<ApiResponse> {
        self.get_with(&format!("/community/{}/posts/", segment(board_name)), params)
            .await
    }

    /// Search posts by text, optionally within one board
    pub async fn search_posts(&self, params: &PostSearchParams) -> Result<ApiResponse> {
        self.get_with("/community/posts/search/", params).await
    }

    pub async fn get_post_detail(&self, post_id: i64) -> Result<ApiResponse> {
        self.get(&format!("/community/posts/{}/", post_id)).await
    }

    /// Create a post on a board
    pub async fn create_post(
        &self,
        board_id: impl Display,
        post: &PostForm,
    ) -> Result<ApiResponse> {
        self.post(&format!("/community/{}/posts/", segment(board_id)), post)
            .await
    }

    pub async fn update_post(&self, post_id: i64, post: &PostForm) -> Result<ApiResponse> {
        self.put(&format!("/community/posts/{}/", post_id), post)
            .await
    }

    pub async fn delete_post(&self, post_id: i64) -> Result<ApiResponse> {
        self.delete(&format!("/community/posts/{}/", post_id)).await
    }

    /// Get comments of a post, replies nested
    pub async fn get_comments(&self, post_id: i64) -> Result<ApiResponse> {
        self.get(&format!("/community/posts/{}/comments/", post_id))
            .await
    }

    pub async fn create_comment(&self, post_id: i64, comment: &CommentForm) -> Result<ApiResponse> {
        self.post(&format!("/community/posts/{}/comments/", post_id), comment)
            .await
    }

    pub async fn update_comment(
        &self,
        post_id: i64,
        comment_id: i64,
        comment: &CommentForm,
    ) -> Result<ApiResponse> {
        self.put(
            &format!("/community/posts/{}/comments/{}/", post_id, comment_id),
            comment,
        )
        .await
    }

    pub async fn delete_comment(&self, post_id: i64, comment_id: i64) -> Result<ApiResponse> {
        self.delete(&format!("/community/posts/{}/comments/{}/", post_id, comment_id))
            .await
    }

    /// Toggle the current user's like on a post
    pub async fn toggle_like(&self, post_id: i64) -> Result<ApiResponse> {
        self.post_empty(&format!("/community/posts/{}/likes/", post_id))
            .await
    }

    /// Toggle the current user's scrap on a post
    pub async fn toggle_scrap(&self, post_id: i64) -> Result<ApiResponse> {
        self.post_empty(&format!("/community/posts/{}/scrap/", post_id))
            .await
    }
}
