//! # Nook Infrastructure
//!
//! Concrete implementations of the ports defined in `nook-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No database, in-memory repositories only
//! - `sqlite` - SQLite persistence via SeaORM
//! - `auth` - Argon2-hashed admin secret

pub mod auth;
pub mod database;
pub mod memory;
pub mod mirror;

// Re-exports - always available
pub use auth::SharedSecretVerifier;
pub use database::DatabaseConfig;
pub use memory::{InMemoryCommentRepository, InMemoryPostRepository};
pub use mirror::MarkdownMirror;

#[cfg(feature = "auth")]
pub use auth::Argon2SecretVerifier;

#[cfg(feature = "sqlite")]
pub use database::{SqliteCommentRepository, SqlitePostRepository};
