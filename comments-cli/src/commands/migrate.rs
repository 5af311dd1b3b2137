//! Schema migration command

use anyhow::Result;
use clap::Parser;

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create the comments table if needed, then exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = super::connect(&args.db).await?;
    pool.close().await;

    tracing::info!(database = %args.db.database_url, "Database is up to date");
    Ok(())
}
