//! Shared helpers for integration tests

#![allow(dead_code)]

use comments_server::db::{create_pool_with_options, migrations, PoolConfig};
use comments_server::{Comment, CommentDraft, CommentRepo};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// A migrated database in a temporary directory.
///
/// Keep the value alive for the duration of the test; dropping it removes
/// the database file.
pub struct TestDb {
    _dir: TempDir,
    pub pool: SqlitePool,
}

impl TestDb {
    pub async fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("comments_server=debug")
            .try_init();

        let dir = TempDir::new().expect("tempdir");
        let url = format!("sqlite://{}", dir.path().join("comments.db").display());
        let config = PoolConfig {
            max_connections: 5,
            ..PoolConfig::default()
        };
        let pool = create_pool_with_options(&url, &config)
            .await
            .expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");

        Self { _dir: dir, pool }
    }

    pub fn repo(&self) -> CommentRepo<'_> {
        CommentRepo::new(&self.pool)
    }

    /// Insert `n` comments named `user-0` .. `user-{n-1}`.
    pub async fn seed(&self, n: usize) -> Vec<Comment> {
        let mut created = Vec::with_capacity(n);
        for i in 0..n {
            let comment = self
                .repo()
                .create(CommentDraft::new(format!("user-{i}"), format!("comment {i}")))
                .await
                .expect("seed insert failed");
            created.push(comment);
        }
        created
    }

    /// Insert a row with an explicit creation timestamp, bypassing the repo.
    pub async fn insert_at(&self, name: &str, created_at: &str) -> u32 {
        let (id,): (u32,) = sqlx::query_as(
            "INSERT INTO comments (name, content, created_at, updated_at) VALUES (?1, 'x', ?2, ?2) RETURNING id",
        )
        .bind(name)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .expect("raw insert failed");
        id
    }
}
