//! Command implementations for the comments CLI

pub mod comments;
pub mod migrate;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;
use sqlx::SqlitePool;

use comments_server::db::{create_pool_with_options, migrations, PoolConfig};

pub use comments::{run_add, run_delete, run_list};
pub use migrate::run_migrate;
pub use serve::run_serve;

/// Default database location (relative to the working directory)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://comments.db";

/// Database connection options shared by every command
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum number of pooled database connections
    #[arg(long, env = "COMMENTS_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            max_connections: self.max_connections,
            ..PoolConfig::default()
        }
    }
}

/// Open the pool and bring the schema up to date.
pub async fn connect(args: &DatabaseArgs) -> Result<SqlitePool> {
    let pool = create_pool_with_options(&args.database_url, &args.pool_config())
        .await
        .with_context(|| format!("Failed to open database {}", args.database_url))?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(pool)
}
