//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits. The database is
//! opened in WAL mode with a busy timeout so concurrent writers queue
//! instead of failing with `SQLITE_BUSY`.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Idle connections are closed after this long.
const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(600);

/// How long a connection waits on a locked database before erroring.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool sizing options
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum number of open connections
    pub max_connections: u32,
    /// Close connections idle for longer than this
    pub idle_timeout: Option<Duration>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            idle_timeout: Some(DEFAULT_IDLE_TIMEOUT),
        }
    }
}

/// Create a SQLite connection pool, creating the database file if missing.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string, e.g. `sqlite://comments.db`
///
/// # Errors
///
/// Returns an error if the URL is invalid or the database can't be opened.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("sqlite://comments.db").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(database_url, &PoolConfig::default()).await
}

/// Create a SQLite connection pool with custom options.
pub async fn create_pool_with_options(
    database_url: &str,
    config: &PoolConfig,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    tracing::debug!(
        url = database_url,
        max_connections = config.max_connections,
        "opening database pool"
    );

    SqlitePoolOptions::new()
        .max_connections(config.max_connections.max(1))
        .idle_timeout(config.idle_timeout)
        .connect_with(options)
        .await
}
