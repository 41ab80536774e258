//! Applies the Nook schema (`comments`, `posts`) to `DATABASE_URL`.

use sea_orm_migration::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        known = migration::Migrator::migrations().len(),
        "Nook schema migrator"
    );

    cli::run_cli(migration::Migrator).await;
}
