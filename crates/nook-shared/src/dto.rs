//! Data Transfer Objects - request/response types for the API.
//!
//! Request types list only the fields a client may set. Anything else in the
//! payload, including `ip`, `user_agent` or `location`, is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to leave a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitCommentRequest {
    pub content: String,
    #[serde(default)]
    pub nickname: Option<String>,
}

/// Request to publish a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Partial post update. Absent or empty fields are left as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
}

/// A stored comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub nickname: String,
    pub ip: String,
    pub user_agent: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

/// A full post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub tags: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post in a listing, without its content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummaryResponse {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub tags: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
