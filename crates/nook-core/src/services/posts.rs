//! Post publishing and administration.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{NewPost, Post, PostDraft, PostId, PostPatch, PostSummary};
use crate::error::DomainError;
use crate::ports::{MirrorError, PostMirror, PostRepository};

/// Post use cases.
///
/// Publishing persists first and mirrors second: the sidecar name needs the
/// store-assigned id, and a failed mirror never undoes the insert. Updates and
/// deletes only touch the store, so an existing sidecar keeps describing the
/// post as it was published.
pub struct PostService {
    repo: Arc<dyn PostRepository>,
    mirror: Arc<dyn PostMirror>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>, mirror: Arc<dyn PostMirror>) -> Self {
        Self { repo, mirror }
    }

    /// Derive the summary, persist, then mirror on a best-effort basis.
    pub async fn publish(&self, draft: PostDraft) -> Result<Post, DomainError> {
        let post = self.repo.create(NewPost::from(draft)).await?;
        tracing::info!(post_id = post.id, title = %post.title, "Post persisted");

        let outcome = self.mirror.mirror(&post).await;
        log_mirror_outcome(&post, &outcome);

        Ok(post)
    }

    /// Merge `patch` into an existing post.
    pub async fn update(&self, id: PostId, patch: PostPatch) -> Result<Post, DomainError> {
        self.repo
            .update(id, patch)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })
    }

    /// Hard delete. Deleting an unknown post is not an error.
    pub async fn delete(&self, id: PostId) -> Result<(), DomainError> {
        let removed = self.repo.delete(id).await?;
        tracing::info!(post_id = id, removed, "Post delete processed");
        Ok(())
    }

    pub async fn get(&self, id: PostId) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })
    }

    /// All posts without bodies, newest first.
    pub async fn list(&self) -> Result<Vec<PostSummary>, DomainError> {
        Ok(self.repo.list_summaries().await?)
    }
}

fn log_mirror_outcome(post: &Post, outcome: &Result<PathBuf, MirrorError>) {
    match outcome {
        Ok(path) => tracing::info!(post_id = post.id, path = %path.display(), "Post mirrored"),
        Err(e) => tracing::warn!(
            post_id = post.id,
            error = %e,
            "Post mirror failed; the stored post is unaffected"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::{FailingMirror, FailingPosts, MemoryPosts, RecordingMirror};

    fn draft(title: &str, content: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            tags: "notes".to_string(),
            content: content.to_string(),
            summary: None,
        }
    }

    #[tokio::test]
    async fn test_publish_derives_summary_and_mirrors_persisted_post() {
        let repo = Arc::new(MemoryPosts::default());
        let mirror = Arc::new(RecordingMirror::default());
        let service = PostService::new(repo.clone(), mirror.clone());

        let content = "b".repeat(60);
        let post = service.publish(draft("A/B", &content)).await.unwrap();

        assert_eq!(post.summary, format!("{}...", "b".repeat(50)));
        let mirrored = mirror.posts();
        assert_eq!(mirrored.len(), 1);
        assert_eq!(mirrored[0], post);
        assert_eq!(repo.get(post.id), Some(post));
    }

    #[tokio::test]
    async fn test_publish_survives_mirror_failure() {
        let repo = Arc::new(MemoryPosts::default());
        let service = PostService::new(repo.clone(), Arc::new(FailingMirror));

        let post = service.publish(draft("Title", "short")).await.unwrap();

        assert_eq!(post.summary, "short");
        let fetched = service.get(post.id).await.unwrap();
        assert_eq!(fetched, post);
    }

    #[tokio::test]
    async fn test_persistence_failure_skips_mirror() {
        let mirror = Arc::new(RecordingMirror::default());
        let service = PostService::new(Arc::new(FailingPosts), mirror.clone());

        let result = service.publish(draft("Title", "body")).await;

        assert!(matches!(result, Err(DomainError::Persistence(_))));
        assert!(mirror.posts().is_empty());
    }

    #[tokio::test]
    async fn test_update_does_not_touch_mirror() {
        let repo = Arc::new(MemoryPosts::default());
        let mirror = Arc::new(RecordingMirror::default());
        let service = PostService::new(repo, mirror.clone());

        let post = service.publish(draft("Title", "body")).await.unwrap();
        let patch = PostPatch {
            title: Some("Renamed".into()),
            ..Default::default()
        };
        let updated = service.update(post.id, patch).await.unwrap();

        assert_eq!(updated.title, "Renamed");
        assert!(updated.updated_at >= post.updated_at);
        assert_eq!(mirror.posts().len(), 1);
        assert_eq!(mirror.posts()[0].title, "Title");
    }

    #[tokio::test]
    async fn test_update_and_get_unknown_post() {
        let service = PostService::new(
            Arc::new(MemoryPosts::default()),
            Arc::new(RecordingMirror::default()),
        );

        assert!(matches!(
            service.update(9, PostPatch::default()).await,
            Err(DomainError::NotFound { id: 9, .. })
        ));
        assert!(matches!(
            service.get(9).await,
            Err(DomainError::NotFound { id: 9, .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = Arc::new(MemoryPosts::default());
        let service = PostService::new(repo.clone(), Arc::new(RecordingMirror::default()));

        let post = service.publish(draft("Title", "body")).await.unwrap();
        service.delete(post.id).await.unwrap();
        service.delete(post.id).await.unwrap();

        assert_eq!(repo.get(post.id), None);
    }

    #[tokio::test]
    async fn test_list_hides_content() {
        let service = PostService::new(
            Arc::new(MemoryPosts::default()),
            Arc::new(RecordingMirror::default()),
        );
        service.publish(draft("One", "body one")).await.unwrap();
        service.publish(draft("Two", "body two")).await.unwrap();

        let listed = service.list().await.unwrap();
        let titles: Vec<_> = listed.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Two", "One"]);
    }
}
