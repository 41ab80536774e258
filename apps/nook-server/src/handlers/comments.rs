//! Comment handlers.

use actix_web::{HttpResponse, web};

use nook_core::domain::{Comment, CommentId, CommentSubmission};
use nook_shared::ApiResponse;
use nook_shared::dto::{CommentResponse, SubmitCommentRequest};

use crate::middleware::client::Client;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(comment: Comment) -> CommentResponse {
    CommentResponse {
        id: comment.id,
        content: comment.content,
        nickname: comment.nickname,
        ip: comment.ip,
        user_agent: comment.user_agent,
        location: comment.location,
        created_at: comment.created_at,
    }
}

/// GET /comments
pub async fn list_comments(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let comments = state.comments.list().await?;
    let body: Vec<CommentResponse> = comments.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /comments
pub async fn submit_comment(
    state: web::Data<AppState>,
    Client(client): Client,
    body: web::Json<SubmitCommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let submission = CommentSubmission {
        content: req.content,
        nickname: req.nickname,
    };

    let saved = state.comments.submit(submission, client).await?;

    Ok(HttpResponse::Ok().json(to_response(saved)))
}

/// DELETE /admin/comments/{id}
pub async fn delete_comment(
    state: web::Data<AppState>,
    path: web::Path<CommentId>,
) -> AppResult<HttpResponse> {
    state.comments.delete(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Comment deleted")))
}
