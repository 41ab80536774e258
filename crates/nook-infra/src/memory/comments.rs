use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use nook_core::domain::{Comment, CommentId, NewComment};
use nook_core::error::RepoError;
use nook_core::ports::{BaseRepository, CommentRepository};

use super::Table;

/// In-memory comment store.
pub struct InMemoryCommentRepository {
    table: RwLock<Table<Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryCommentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Comment, CommentId> for InMemoryCommentRepository {
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn delete(&self, id: CommentId) -> Result<bool, RepoError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, comment: NewComment) -> Result<Comment, RepoError> {
        let mut table = self.table.write().await;
        let id = table.next_id();
        let comment = comment.into_comment(id, Utc::now());
        table.rows.insert(id, comment.clone());
        Ok(comment)
    }

    async fn list_recent(&self) -> Result<Vec<Comment>, RepoError> {
        let table = self.table.read().await;
        let mut comments: Vec<Comment> = table.rows.values().cloned().collect();
        comments.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_comment(content: &str) -> NewComment {
        NewComment {
            content: content.to_string(),
            nickname: "nick".to_string(),
            ip: "127.0.0.1".to_string(),
            user_agent: "test".to_string(),
            location: "here".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryCommentRepository::new();
        let first = repo.create(new_comment("a")).await.unwrap();
        let second = repo.create(new_comment("b")).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(repo.find_by_id(first.id).await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryCommentRepository::new();
        let first = repo.create(new_comment("a")).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());
        assert!(!repo.delete(first.id).await.unwrap());

        let second = repo.create(new_comment("b")).await.unwrap();
        assert_ne!(second.id, first.id);
    }

    #[tokio::test]
    async fn test_list_recent_order() {
        let repo = InMemoryCommentRepository::new();
        for content in ["one", "two", "three"] {
            repo.create(new_comment(content)).await.unwrap();
        }

        let listed = repo.list_recent().await.unwrap();
        let contents: Vec<_> = listed.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, ["three", "two", "one"]);
    }
}
