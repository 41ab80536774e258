//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use nook_core::services::CommentPolicy;
use nook_infra::DatabaseConfig;

/// Configuration errors detected at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("ADMIN_SECRET or ADMIN_SECRET_HASH must be set")]
    MissingAdminSecret,

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// How the admin credential is checked.
#[derive(Clone)]
pub enum AdminCredential {
    /// Plain shared secret.
    Secret(String),
    /// Argon2 PHC hash of the secret.
    Hash(String),
}

impl std::fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminCredential::Secret(_) => f.write_str("Secret(***)"),
            AdminCredential::Hash(_) => f.write_str("Hash(***)"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub auto_migrate: bool,
    pub admin: AdminCredential,
    pub sidecar_dir: PathBuf,
    pub comments: CommentPolicy,
    /// Take the client address from `Forwarded` / `X-Forwarded-For`.
    /// Only safe behind a proxy that overwrites those headers.
    pub trust_proxy: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from any name -> value lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = match lookup("DATABASE_URL") {
            Some(url) => Some(DatabaseConfig {
                url,
                max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
                min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", 1)?,
            }),
            None => None,
        };

        let admin = match (lookup("ADMIN_SECRET_HASH"), lookup("ADMIN_SECRET")) {
            (Some(hash), _) if !hash.is_empty() => AdminCredential::Hash(hash),
            (_, Some(secret)) if !secret.is_empty() => AdminCredential::Secret(secret),
            _ => return Err(ConfigError::MissingAdminSecret),
        };

        let defaults = CommentPolicy::default();
        let comments = CommentPolicy {
            anonymous_nickname: lookup("COMMENT_ANONYMOUS_NICKNAME")
                .unwrap_or(defaults.anonymous_nickname),
            default_location: lookup("COMMENT_DEFAULT_LOCATION")
                .unwrap_or(defaults.default_location),
            loopback_location: lookup("COMMENT_LOOPBACK_LOCATION")
                .unwrap_or(defaults.loopback_location),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 8080)?,
            database,
            auto_migrate: lookup("AUTO_MIGRATE")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            admin,
            sidecar_dir: lookup("SIDECAR_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("md")),
            comments,
            trust_proxy: lookup("TRUST_PROXY")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
