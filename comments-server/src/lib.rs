//! comments-server: comment board backend
//!
//! A comment store over SQLite (create, list, get, delete with validation
//! and transactional writes) and the HTTP API that exposes it.

pub mod db;
pub mod http;
pub mod models;

pub use db::repos::{Comment, CommentPage, CommentRepo, StoreError};
pub use http::{build_router, run_server, ServerConfig};
pub use models::{CommentDraft, PageSize, Pagination, ValidationError};
