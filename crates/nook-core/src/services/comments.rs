//! Comment enrichment and storage.

use std::sync::Arc;

use crate::domain::{ClientContext, Comment, CommentId, CommentSubmission, NewComment};
use crate::error::DomainError;
use crate::ports::CommentRepository;

/// Placeholders used when enriching a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentPolicy {
    /// Nickname for visitors who did not give one.
    pub anonymous_nickname: String,
    /// Location shown for every non-local visitor.
    pub default_location: String,
    /// Location shown when the comment came from the machine itself.
    pub loopback_location: String,
}

impl Default for CommentPolicy {
    fn default() -> Self {
        Self {
            anonymous_nickname: "Anonymous passerby".to_string(),
            default_location: "Somewhere on the internet".to_string(),
            loopback_location: "Local test (localhost)".to_string(),
        }
    }
}

/// Whether `ip` is one of the loopback forms a local test client shows up as.
pub fn is_loopback(ip: &str) -> bool {
    matches!(ip, "127.0.0.1" | "::1")
}

impl CommentPolicy {
    /// Fill in everything the server derives. Transport metadata always wins.
    pub fn enrich(&self, submission: CommentSubmission, client: ClientContext) -> NewComment {
        let location = if is_loopback(&client.ip) {
            self.loopback_location.clone()
        } else {
            self.default_location.clone()
        };

        let nickname = submission
            .nickname
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.anonymous_nickname.clone());

        NewComment {
            content: submission.content,
            nickname,
            ip: client.ip,
            user_agent: client.user_agent,
            location,
        }
    }
}

/// Comment use cases.
pub struct CommentService {
    repo: Arc<dyn CommentRepository>,
    policy: CommentPolicy,
}

impl CommentService {
    pub fn new(repo: Arc<dyn CommentRepository>, policy: CommentPolicy) -> Self {
        Self { repo, policy }
    }

    /// Enrich and store a visitor comment.
    pub async fn submit(
        &self,
        submission: CommentSubmission,
        client: ClientContext,
    ) -> Result<Comment, DomainError> {
        let comment = self.policy.enrich(submission, client);
        let saved = self.repo.create(comment).await?;

        tracing::info!(
            comment_id = saved.id,
            location = %saved.location,
            "Comment stored"
        );

        Ok(saved)
    }

    /// All comments, newest first.
    pub async fn list(&self) -> Result<Vec<Comment>, DomainError> {
        Ok(self.repo.list_recent().await?)
    }

    /// Hard delete. Deleting an unknown comment is not an error.
    pub async fn delete(&self, id: CommentId) -> Result<(), DomainError> {
        let removed = self.repo.delete(id).await?;
        tracing::info!(comment_id = id, removed, "Comment delete processed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::MemoryComments;

    fn service() -> (CommentService, Arc<MemoryComments>) {
        let repo = Arc::new(MemoryComments::default());
        (
            CommentService::new(repo.clone(), CommentPolicy::default()),
            repo,
        )
    }

    fn submission(content: &str, nickname: Option<&str>) -> CommentSubmission {
        CommentSubmission {
            content: content.to_string(),
            nickname: nickname.map(str::to_string),
        }
    }

    #[test]
    fn test_loopback_forms() {
        assert!(is_loopback("127.0.0.1"));
        assert!(is_loopback("::1"));
        assert!(!is_loopback("127.0.0.2"));
        assert!(!is_loopback("203.0.113.7"));
        assert!(!is_loopback("unknown"));
    }

    #[test]
    fn test_enrich_uses_placeholders() {
        let policy = CommentPolicy::default();
        let comment = policy.enrich(
            submission("hi", None),
            ClientContext::new("203.0.113.7", "curl/8.0"),
        );

        assert_eq!(comment.nickname, policy.anonymous_nickname);
        assert_eq!(comment.location, policy.default_location);
        assert_eq!(comment.ip, "203.0.113.7");
        assert_eq!(comment.user_agent, "curl/8.0");
    }

    #[test]
    fn test_enrich_keeps_given_nickname_verbatim() {
        let policy = CommentPolicy::default();
        let comment = policy.enrich(
            submission("hi", Some("  Mika ")),
            ClientContext::new("::1", ""),
        );

        assert_eq!(comment.nickname, "  Mika ");
        assert_eq!(comment.location, policy.loopback_location);
    }

    #[test]
    fn test_enrich_treats_empty_nickname_as_absent() {
        let policy = CommentPolicy {
            anonymous_nickname: "ghost".into(),
            ..Default::default()
        };
        let comment = policy.enrich(submission("hi", Some("")), ClientContext::new("::1", ""));
        assert_eq!(comment.nickname, "ghost");
    }

    #[tokio::test]
    async fn test_submit_from_localhost() {
        let (service, repo) = service();

        let saved = service
            .submit(
                submission("hi", None),
                ClientContext::new("127.0.0.1", "Mozilla/5.0"),
            )
            .await
            .unwrap();

        assert_eq!(saved.ip, "127.0.0.1");
        assert_eq!(saved.nickname, "Anonymous passerby");
        assert_eq!(saved.location, "Local test (localhost)");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let (service, _repo) = service();
        let client = ClientContext::new("198.51.100.1", "ua");

        service.submit(submission("first", None), client.clone()).await.unwrap();
        service.submit(submission("second", None), client).await.unwrap();

        let listed = service.list().await.unwrap();
        let contents: Vec<_> = listed.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, ["second", "first"]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let (service, _repo) = service();
        let client = ClientContext::new("198.51.100.1", "ua");

        let first = service.submit(submission("first", None), client.clone()).await.unwrap();
        let second = service.submit(submission("second", None), client.clone()).await.unwrap();
        service.delete(first.id).await.unwrap();
        let third = service.submit(submission("third", None), client).await.unwrap();

        assert!(third.id > second.id);
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_unknown_comment_is_ok() {
        let (service, _repo) = service();
        assert!(service.delete(42).await.is_ok());
    }
}
