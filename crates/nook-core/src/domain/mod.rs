//! Domain entities - the core business objects.

mod comment;

mod post;

pub use comment::{ClientContext, Comment, CommentId, CommentSubmission, NewComment};
pub use post::{
    NewPost, Post, PostDraft, PostId, PostPatch, PostSummary, SUMMARY_ELLIPSIS, SUMMARY_MAX_CHARS,
    derive_summary,
};
