//! One-time store initialization at process start.
//!
//! Creates the directory holding the database file when the file is absent,
//! opens the pool, and applies the schema migrations. Whether the schema is
//! in place is decided by the migration ledger inside the database, not by
//! the file existing, so an interrupted first start is retried cleanly on the
//! next one.

use std::path::Path;

use crate::{create_pool, run_migrations, DbPool};

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Failed to create database directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open database: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("Failed to apply schema: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Open the store at `path`, creating and initializing it if needed.
pub async fn bootstrap(path: &Path) -> Result<DbPool, BootstrapError> {
    if !path.exists() {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| BootstrapError::CreateDir {
                    path: dir.display().to_string(),
                    source,
                })?;
        }
        tracing::info!(path = %path.display(), "Creating new book store");
    }

    let pool = create_pool(path).await?;

    if let Err(err) = run_migrations(&pool).await {
        pool.close().await;
        return Err(err.into());
    }

    tracing::info!(path = %path.display(), "Book store ready");
    Ok(pool)
}
