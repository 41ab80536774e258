use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use nook_core::domain::{NewPost, Post, PostId, PostPatch, PostSummary};
use nook_core::error::RepoError;
use nook_core::ports::{BaseRepository, PostRepository};

use super::Table;

/// In-memory post store.
pub struct InMemoryPostRepository {
    table: RwLock<Table<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn delete(&self, id: PostId) -> Result<bool, RepoError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let id = table.next_id();
        let post = post.into_post(id, Utc::now());
        table.rows.insert(id, post.clone());
        Ok(post)
    }

    async fn list_summaries(&self) -> Result<Vec<PostSummary>, RepoError> {
        let table = self.table.read().await;
        let mut summaries: Vec<PostSummary> = table.rows.values().map(PostSummary::from).collect();
        summaries.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(summaries)
    }

    async fn update(&self, id: PostId, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let mut table = self.table.write().await;
        let Some(post) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        patch.apply_to(post);
        post.updated_at = Utc::now();
        Ok(Some(post.clone()))
    }
}
