//! Post handlers.

use actix_web::{HttpResponse, web};

use nook_core::domain::{Post, PostDraft, PostId, PostPatch, PostSummary};
use nook_shared::ApiResponse;
use nook_shared::dto::{CreatePostRequest, PostResponse, PostSummaryResponse, UpdatePostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        summary: post.summary,
        content: post.content,
        tags: post.tags,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

fn to_summary_response(post: PostSummary) -> PostSummaryResponse {
    PostSummaryResponse {
        id: post.id,
        title: post.title,
        summary: post.summary,
        tags: post.tags,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let body: Vec<PostSummaryResponse> = posts.into_iter().map(to_summary_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /admin/posts
///
/// Succeeds once the post is stored, whether or not the sidecar was written.
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let draft = PostDraft {
        title: req.title,
        tags: req.tags,
        content: req.content,
        summary: req.summary,
    };

    let post = state.posts.publish(draft).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        to_response(post),
        "Post published",
    )))
}

/// PUT /admin/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let patch = PostPatch {
        title: req.title,
        summary: req.summary,
        content: req.content,
        tags: req.tags,
    };

    let post = state.posts.update(path.into_inner(), patch).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(post))))
}

/// DELETE /admin/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Post deleted")))
}
