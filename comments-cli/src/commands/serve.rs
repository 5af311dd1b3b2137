//! HTTP server command
//!
//! Runs the comment API until Ctrl+C / SIGTERM.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use comments_server::http::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "COMMENTS_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long, env = "COMMENTS_CORS_PERMISSIVE")]
    pub cors_permissive: bool,

    /// Request timeout in seconds
    #[arg(long, env = "COMMENTS_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout: u64,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting comment server on {}", args.bind);

    let pool = super::connect(&args.db).await?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        request_timeout: Duration::from_secs(args.timeout),
    };

    // Run server (blocks until shutdown)
    run_server(pool.clone(), config)
        .await
        .context("Server error")?;

    pool.close().await;
    Ok(())
}
