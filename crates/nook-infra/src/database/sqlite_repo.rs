//! SQLite repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, NotSet, QueryOrder, QuerySelect, Set};

use nook_core::domain::{Comment, NewComment, NewPost, Post, PostId, PostPatch, PostSummary};
use nook_core::error::RepoError;
use nook_core::ports::{CommentRepository, PostRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::sqlite_base::{SqliteBaseRepository, repo_error};

/// SQLite comment repository.
pub type SqliteCommentRepository = SqliteBaseRepository<CommentEntity>;

/// SQLite post repository.
pub type SqlitePostRepository = SqliteBaseRepository<PostEntity>;

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn create(&self, comment: NewComment) -> Result<Comment, RepoError> {
        let model = comment::ActiveModel {
            id: NotSet,
            content: Set(comment.content),
            nickname: Set(comment.nickname),
            ip: Set(comment.ip),
            user_agent: Set(comment.user_agent),
            location: Set(comment.location),
            created_at: Set(Utc::now()),
        }
        .insert(&*self.db)
        .await
        .map_err(repo_error)?;

        Ok(model.into())
    }

    async fn list_recent(&self) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .order_by_desc(comment::Column::CreatedAt)
            .order_by_desc(comment::Column::Id)
            .all(&*self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let now = Utc::now();
        let model = post::ActiveModel {
            id: NotSet,
            title: Set(post.title),
            summary: Set(post.summary),
            content: Set(post.content),
            tags: Set(post.tags),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await
        .map_err(repo_error)?;

        Ok(model.into())
    }

    async fn list_summaries(&self) -> Result<Vec<PostSummary>, RepoError> {
        let rows = PostEntity::find()
            .select_only()
            .columns([
                post::Column::Id,
                post::Column::Title,
                post::Column::Summary,
                post::Column::Tags,
                post::Column::CreatedAt,
                post::Column::UpdatedAt,
            ])
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .into_model::<post::SummaryRow>()
            .all(&*self.db)
            .await
            .map_err(repo_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: PostId, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let Some(model) = PostEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(repo_error)?
        else {
            return Ok(None);
        };

        let mut post: Post = model.into();
        patch.apply_to(&mut post);

        let active = post::ActiveModel {
            id: Set(post.id),
            title: Set(post.title),
            summary: Set(post.summary),
            content: Set(post.content),
            tags: Set(post.tags),
            created_at: NotSet,
            updated_at: Set(Utc::now()),
        };
        match active.update(&*self.db).await {
            Ok(updated) => Ok(Some(updated.into())),
            // Deleted between the read and the write.
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(repo_error(e)),
        }
    }
}
