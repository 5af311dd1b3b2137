//! Schema migrations for the comments table
//!
//! Idempotent: safe to run on every startup.

use sqlx::SqlitePool;

/// Run all migrations
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running comment migrations...");

    // AUTOINCREMENT keeps ids monotonic and never reuses a deleted id.
    // Timestamps are fixed-width UTC text, so text order is time order.
    // length() stops at NUL, so the checks compare against '' and the
    // name length limit is enforced by CommentDraft::validate.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL CHECK (name <> ''),
            content TEXT NOT NULL CHECK (content <> ''),
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_comments_created_at
        ON comments (created_at DESC, id DESC)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Comment migrations complete");
    Ok(())
}
