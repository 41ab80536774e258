use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned post identity.
pub type PostId = i64;

/// Derived summaries keep at most this many characters of the content.
pub const SUMMARY_MAX_CHARS: usize = 50;

/// Appended to a summary that was cut short.
pub const SUMMARY_ELLIPSIS: &str = "...";

/// Post entity - a published blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub tags: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing projection of a post, without the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
    pub summary: String,
    pub tags: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            summary: post.summary.clone(),
            tags: post.tags.clone(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// A post as submitted by the author, before publishing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub tags: String,
    pub content: String,
    pub summary: Option<String>,
}

/// A post ready to be inserted: the summary is always filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub tags: String,
}

impl NewPost {
    /// Attach the store-assigned fields.
    pub fn into_post(self, id: PostId, created_at: DateTime<Utc>) -> Post {
        Post {
            id,
            title: self.title,
            summary: self.summary,
            content: self.content,
            tags: self.tags,
            created_at,
            updated_at: created_at,
        }
    }
}

impl From<PostDraft> for NewPost {
    fn from(draft: PostDraft) -> Self {
        let summary = match draft.summary {
            Some(summary) if !summary.is_empty() => summary,
            _ => derive_summary(&draft.content),
        };

        Self {
            title: draft.title,
            summary,
            content: draft.content,
            tags: draft.tags,
        }
    }
}

/// Build a summary from post content.
///
/// Counts `char`s rather than bytes so multi-byte text is never split
/// mid-character.
pub fn derive_summary(content: &str) -> String {
    match content.char_indices().nth(SUMMARY_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &content[..cut], SUMMARY_ELLIPSIS),
        None => content.to_string(),
    }
}

/// Partial update of a post. Absent or empty fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
}

impl PostPatch {
    /// Merge the patch into `post`. Returns whether anything changed.
    pub fn apply_to(self, post: &mut Post) -> bool {
        let mut changed = false;
        for (slot, value) in [
            (&mut post.title, self.title),
            (&mut post.summary, self.summary),
            (&mut post.content, self.content),
            (&mut post.tags, self.tags),
        ] {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                *slot = value;
                changed = true;
            }
        }
        changed
    }

    pub fn is_empty(&self) -> bool {
        [&self.title, &self.summary, &self.content, &self.tags]
            .iter()
            .all(|field| field.as_deref().is_none_or(str::is_empty))
    }
}
