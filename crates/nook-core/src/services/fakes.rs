//! Minimal in-process ports for pipeline tests.

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{
    Comment, CommentId, NewComment, NewPost, Post, PostId, PostPatch, PostSummary,
};
use crate::error::RepoError;
use crate::ports::{
    BaseRepository, CommentRepository, MirrorError, PostMirror, PostRepository,
};

#[derive(Default)]
pub struct MemoryComments {
    rows: Mutex<Vec<Comment>>,
    next_id: Mutex<CommentId>,
}

impl MemoryComments {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseRepository<Comment, CommentId> for MemoryComments {
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, RepoError> {
        Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn delete(&self, id: CommentId) -> Result<bool, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        Ok(rows.len() != before)
    }
}

#[async_trait]
impl CommentRepository for MemoryComments {
    async fn create(&self, comment: NewComment) -> Result<Comment, RepoError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let comment = comment.into_comment(*next_id, Utc::now());
        self.rows.lock().unwrap().push(comment.clone());
        Ok(comment)
    }

    async fn list_recent(&self) -> Result<Vec<Comment>, RepoError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }
}

#[derive(Default)]
pub struct MemoryPosts {
    rows: Mutex<Vec<Post>>,
    next_id: Mutex<PostId>,
}

impl MemoryPosts {
    pub fn get(&self, id: PostId) -> Option<Post> {
        self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for MemoryPosts {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        Ok(self.get(id))
    }

    async fn delete(&self, id: PostId) -> Result<bool, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok(rows.len() != before)
    }
}

#[async_trait]
impl PostRepository for MemoryPosts {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let post = post.into_post(*next_id, Utc::now());
        self.rows.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn list_summaries(&self) -> Result<Vec<PostSummary>, RepoError> {
        let rows = self.rows.lock().unwrap();
        let mut summaries: Vec<PostSummary> = rows.iter().map(PostSummary::from).collect();
        summaries.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(summaries)
    }

    async fn update(&self, id: PostId, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(post) = rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        patch.apply_to(post);
        post.updated_at = Utc::now();
        Ok(Some(post.clone()))
    }
}

/// Post store whose writes always fail.
pub struct FailingPosts;

#[async_trait]
impl BaseRepository<Post, PostId> for FailingPosts {
    async fn find_by_id(&self, _id: PostId) -> Result<Option<Post>, RepoError> {
        Err(RepoError::Connection("store offline".into()))
    }

    async fn delete(&self, _id: PostId) -> Result<bool, RepoError> {
        Err(RepoError::Connection("store offline".into()))
    }
}

#[async_trait]
impl PostRepository for FailingPosts {
    async fn create(&self, _post: NewPost) -> Result<Post, RepoError> {
        Err(RepoError::Query("disk I/O error".into()))
    }

    async fn list_summaries(&self) -> Result<Vec<PostSummary>, RepoError> {
        Err(RepoError::Connection("store offline".into()))
    }

    async fn update(&self, _id: PostId, _patch: PostPatch) -> Result<Option<Post>, RepoError> {
        Err(RepoError::Connection("store offline".into()))
    }
}

#[derive(Default)]
pub struct RecordingMirror {
    posts: Mutex<Vec<Post>>,
}

impl RecordingMirror {
    pub fn posts(&self) -> Vec<Post> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostMirror for RecordingMirror {
    async fn mirror(&self, post: &Post) -> Result<PathBuf, MirrorError> {
        self.posts.lock().unwrap().push(post.clone());
        Ok(PathBuf::from(format!("{}.md", post.id)))
    }
}

pub struct FailingMirror;

#[async_trait]
impl PostMirror for FailingMirror {
    async fn mirror(&self, _post: &Post) -> Result<PathBuf, MirrorError> {
        Err(MirrorError::Io {
            path: PathBuf::from("readonly/1-Title.md"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        })
    }
}
