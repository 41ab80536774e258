//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod mirror;
mod repository;

pub use auth::{AuthError, CredentialVerifier};
pub use mirror::{MirrorError, PostMirror};
pub use repository::{BaseRepository, CommentRepository, PostRepository};
