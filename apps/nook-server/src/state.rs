//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;

use nook_core::ports::{CommentRepository, CredentialVerifier, PostMirror, PostRepository};
use nook_core::services::{AccessGate, CommentPolicy, CommentService, PostService};
use nook_infra::{
    InMemoryCommentRepository, InMemoryPostRepository, MarkdownMirror, SharedSecretVerifier,
};

use crate::config::{AdminCredential, AppConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub comments: Arc<CommentService>,
    pub posts: Arc<PostService>,
    pub gate: AccessGate,
    /// Which store backs the repositories, reported by the health check.
    pub storage: Storage,
    /// Whether client addresses come from proxy headers or the socket.
    pub trust_proxy: bool,
}

/// Backing store in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    Memory,
    Sqlite,
}

impl Storage {
    pub fn as_str(self) -> &'static str {
        match self {
            Storage::Memory => "memory",
            Storage::Sqlite => "sqlite",
        }
    }
}

type Repositories = (Arc<dyn CommentRepository>, Arc<dyn PostRepository>, Storage);

impl AppState {
    /// Assemble the state from already-built ports.
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        post_repo: Arc<dyn PostRepository>,
        mirror: Arc<dyn PostMirror>,
        verifier: Arc<dyn CredentialVerifier>,
        policy: CommentPolicy,
    ) -> Self {
        Self {
            comments: Arc::new(CommentService::new(comment_repo, policy)),
            posts: Arc::new(PostService::new(post_repo, mirror)),
            gate: AccessGate::new(verifier),
            storage: Storage::Memory,
            trust_proxy: false,
        }
    }

    /// Build the application state with appropriate implementations.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let (comment_repo, post_repo, storage) = build_repositories(config).await?;
        let verifier = build_verifier(&config.admin)?;
        let mirror = Arc::new(MarkdownMirror::new(config.sidecar_dir.clone()));

        tracing::info!(
            storage = storage.as_str(),
            trust_proxy = config.trust_proxy,
            sidecar_dir = %config.sidecar_dir.display(),
            "Application state initialized"
        );

        Ok(Self {
            storage,
            trust_proxy: config.trust_proxy,
            ..Self::new(
                comment_repo,
                post_repo,
                mirror,
                verifier,
                config.comments.clone(),
            )
        })
    }
}

fn in_memory() -> Repositories {
    (
        Arc::new(InMemoryCommentRepository::new()),
        Arc::new(InMemoryPostRepository::new()),
        Storage::Memory,
    )
}

#[cfg(feature = "sqlite")]
async fn build_repositories(config: &AppConfig) -> anyhow::Result<Repositories> {
    use migration::{Migrator, MigratorTrait};
    use nook_infra::{SqliteCommentRepository, SqlitePostRepository};

    let Some(db_config) = &config.database else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return Ok(in_memory());
    };

    let conn = nook_infra::database::connect(db_config)
        .await
        .context("failed to connect to database")?;

    if config.auto_migrate {
        Migrator::up(&conn, None)
            .await
            .context("failed to apply migrations")?;
        tracing::info!("Database migrations applied");
    }

    let conn = Arc::new(conn);
    Ok((
        Arc::new(SqliteCommentRepository::from_shared(conn.clone())),
        Arc::new(SqlitePostRepository::from_shared(conn)),
        Storage::Sqlite,
    ))
}

#[cfg(not(feature = "sqlite"))]
async fn build_repositories(config: &AppConfig) -> anyhow::Result<Repositories> {
    if config.database.is_some() {
        tracing::warn!("DATABASE_URL ignored: built without the sqlite feature");
    }
    tracing::info!("Running without sqlite feature - using in-memory repositories");
    Ok(in_memory())
}

fn build_verifier(admin: &AdminCredential) -> anyhow::Result<Arc<dyn CredentialVerifier>> {
    match admin {
        AdminCredential::Secret(secret) => Ok(Arc::new(SharedSecretVerifier::new(secret.clone()))),
        #[cfg(feature = "auth")]
        AdminCredential::Hash(hash) => {
            let verifier = nook_infra::Argon2SecretVerifier::new(hash.clone())
                .context("ADMIN_SECRET_HASH is not a valid Argon2 hash")?;
            Ok(Arc::new(verifier))
        }
        #[cfg(not(feature = "auth"))]
        AdminCredential::Hash(_) => {
            anyhow::bail!("ADMIN_SECRET_HASH requires the auth feature")
        }
    }
}
