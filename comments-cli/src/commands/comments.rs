//! Comment administration commands
//!
//! Thin wrappers over the comment store for local use:
//!   comments add --name Alice --content "hi"
//!   comments list --page 2 --size 20
//!   comments list --size -1
//!   comments delete 42

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use comments_server::models::{DEFAULT_PAGE, DEFAULT_SIZE};
use comments_server::{CommentDraft, CommentRepo, Pagination};

use super::DatabaseArgs;

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Commenter name (1-100 characters)
    #[arg(long)]
    pub name: String,

    /// Comment text
    #[arg(long)]
    pub content: String,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Page number (1-indexed)
    #[arg(long, default_value_t = DEFAULT_PAGE)]
    pub page: i64,

    /// Comments per page, or -1 for all
    #[arg(long, default_value_t = DEFAULT_SIZE, allow_negative_numbers = true)]
    pub size: i64,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Arguments for the delete command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Id of the comment to delete
    pub id: u32,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create a comment and print it as JSON
pub async fn run_add(args: AddArgs) -> Result<()> {
    let pool = super::connect(&args.db).await?;

    let comment = CommentRepo::new(&pool)
        .create(CommentDraft::new(args.name, args.content))
        .await
        .context("Failed to add comment")?;

    println!("{}", serde_json::to_string_pretty(&comment)?);
    Ok(())
}

/// Print one page of comments as JSON
pub async fn run_list(args: ListArgs) -> Result<()> {
    let page = Pagination::from_query(args.page, args.size)?;
    let pool = super::connect(&args.db).await?;

    let result = CommentRepo::new(&pool)
        .list(page)
        .await
        .context("Failed to list comments")?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Delete a comment; fails if it does not exist
pub async fn run_delete(args: DeleteArgs) -> Result<()> {
    let pool = super::connect(&args.db).await?;

    let removed = CommentRepo::new(&pool)
        .delete(args.id)
        .await
        .context("Failed to delete comment")?;

    if !removed {
        return Err(anyhow!("comment {} not found", args.id));
    }

    tracing::info!(id = args.id, "Comment deleted");
    Ok(())
}
