use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned comment identity.
pub type CommentId = i64;

/// Comment entity - a visitor message as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub nickname: String,
    pub ip: String,
    pub user_agent: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

/// What a visitor actually gets to choose.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentSubmission {
    pub content: String,
    pub nickname: Option<String>,
}

/// Metadata observed by the transport for the submitting connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientContext {
    pub ip: String,
    pub user_agent: String,
}

impl ClientContext {
    pub fn new(ip: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            user_agent: user_agent.into(),
        }
    }
}

/// A fully enriched comment waiting for its identity and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
    pub nickname: String,
    pub ip: String,
    pub user_agent: String,
    pub location: String,
}

impl NewComment {
    /// Attach the store-assigned fields.
    pub fn into_comment(self, id: CommentId, created_at: DateTime<Utc>) -> Comment {
        Comment {
            id,
            content: self.content,
            nickname: self.nickname,
            ip: self.ip,
            user_agent: self.user_agent,
            location: self.location,
            created_at,
        }
    }
}
