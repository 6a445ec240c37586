use std::path::Path;
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod bootstrap;
pub mod models;
pub mod repositories;

pub use bootstrap::{bootstrap, BootstrapError};

pub type DbPool = sqlx::SqlitePool;

/// Embedded schema migrations for the `books` store.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Maximum number of pooled SQLite connections.
const MAX_CONNECTIONS: u32 = 5;

/// How long a writer waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open a connection pool on the SQLite file at `path`, creating the file
/// if it does not exist. The parent directory must already exist.
pub async fn create_pool(path: &Path) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// Verify the store answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending schema migrations. Each migration runs in its own
/// transaction and is recorded in `_sqlx_migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
