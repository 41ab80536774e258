//! Post mirroring port.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::Post;

/// Writes a portable copy of a published post somewhere outside the store.
#[async_trait]
pub trait PostMirror: Send + Sync {
    /// Mirror `post` and return where it landed.
    async fn mirror(&self, post: &Post) -> Result<PathBuf, MirrorError>;
}

/// Mirror errors. These are logged, never returned to clients.
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
