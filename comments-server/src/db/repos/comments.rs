//! Comment repository
//!
//! Handles comment CRUD with proper patterns:
//! - create: validate, then INSERT ... RETURNING inside a transaction
//! - list: count + page in one read transaction (same snapshot)
//! - delete: single transaction, reports whether a row was removed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::models::{CommentDraft, Pagination, ValidationError};

/// Comment record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One page of comments plus the table-wide count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentPage {
    /// Total count across all pages
    pub total: i64,
    /// Comments for the requested page, newest first
    pub comments: Vec<Comment>,
}

/// Comment store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid comment id")]
    InvalidId,

    #[error("comment {id} not found")]
    NotFound { id: u32 },

    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Comment repository
pub struct CommentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CommentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Validate and persist a new comment.
    ///
    /// Storage assigns `id`, `created_at` and `updated_at`. The insert runs
    /// in a transaction; on error it is dropped uncommitted and rolls back.
    pub async fn create(&self, draft: CommentDraft) -> Result<Comment, StoreError> {
        draft.validate()?;

        let mut tx = self.pool.begin().await?;

        let comment: Comment = sqlx::query_as(
            r#"
            INSERT INTO comments (name, content)
            VALUES (?1, ?2)
            RETURNING id, name, content, created_at, updated_at
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.content)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(id = comment.id, "comment created");
        Ok(comment)
    }

    /// Get a single comment by id.
    pub async fn get(&self, id: u32) -> Result<Comment, StoreError> {
        if id == 0 {
            return Err(StoreError::InvalidId);
        }

        sqlx::query_as(
            r#"
            SELECT id, name, content, created_at, updated_at
            FROM comments
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })
    }

    /// List comments newest first, with the total row count.
    ///
    /// Ties on `created_at` are broken by `id DESC`, so consecutive pages
    /// never overlap or skip. Count and page are read in one transaction.
    pub async fn list(&self, page: Pagination) -> Result<CommentPage, StoreError> {
        let mut tx = self.pool.begin().await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
            .fetch_one(&mut *tx)
            .await?;

        let comments: Vec<Comment> = match page.limit() {
            Some(limit) => {
                let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
                sqlx::query_as(
                    r#"
                    SELECT id, name, content, created_at, updated_at
                    FROM comments
                    ORDER BY created_at DESC, id DESC
                    LIMIT ?1 OFFSET ?2
                    "#,
                )
                .bind(i64::from(limit))
                .bind(offset)
                .fetch_all(&mut *tx)
                .await?
            }
            None => {
                sqlx::query_as(
                    r#"
                    SELECT id, name, content, created_at, updated_at
                    FROM comments
                    ORDER BY created_at DESC, id DESC
                    "#,
                )
                .fetch_all(&mut *tx)
                .await?
            }
        };

        tx.commit().await?;

        Ok(CommentPage { total, comments })
    }

    /// Delete a comment by id.
    ///
    /// Returns `true` if a row was removed, `false` if none matched. Callers
    /// treat `false` as not-found; no separate existence check is needed.
    pub async fn delete(&self, id: u32) -> Result<bool, StoreError> {
        if id == 0 {
            return Err(StoreError::InvalidId);
        }

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM comments WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let removed = result.rows_affected() > 0;
        tracing::debug!(id, removed, "comment delete");
        Ok(removed)
    }

    /// Total number of stored comments.
    pub async fn count(&self) -> Result<i64, StoreError> {
        let total = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
            .fetch_one(self.pool)
            .await?;
        Ok(total)
    }
}
