use async_trait::async_trait;

use crate::domain::{
    Comment, CommentId, NewComment, NewPost, Post, PostId, PostPatch, PostSummary,
};
use crate::error::RepoError;

/// Operations every record kind supports.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Hard delete by ID. Returns `false` when no row matched.
    async fn delete(&self, id: ID) -> Result<bool, RepoError>;
}

/// Comment storage.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, CommentId> {
    /// Insert a comment; the store assigns `id` and `created_at`.
    async fn create(&self, comment: NewComment) -> Result<Comment, RepoError>;

    /// All comments, newest first.
    async fn list_recent(&self) -> Result<Vec<Comment>, RepoError>;
}

/// Post storage.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// Insert a post; the store assigns `id` and both timestamps.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// All posts without their bodies, newest first.
    async fn list_summaries(&self) -> Result<Vec<PostSummary>, RepoError>;

    /// Merge `patch` into the stored post and bump `updated_at`.
    /// Returns `None` if the post does not exist.
    async fn update(&self, id: PostId, patch: PostPatch) -> Result<Option<Post>, RepoError>;
}
