//! SQLite persistence via SeaORM.

mod connections;

#[cfg(feature = "sqlite")]
mod sqlite_base;
#[cfg(feature = "sqlite")]
mod sqlite_repo;

#[cfg(feature = "sqlite")]
pub mod entity;

pub use connections::DatabaseConfig;

#[cfg(feature = "sqlite")]
pub use connections::connect;

#[cfg(feature = "sqlite")]
pub use sqlite_repo::{SqliteCommentRepository, SqlitePostRepository};
