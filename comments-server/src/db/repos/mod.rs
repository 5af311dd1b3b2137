//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the pool; no state between calls
//! - Uses transactions for every write
//! - Validates input before touching storage

pub mod comments;

pub use comments::{Comment, CommentPage, CommentRepo, StoreError};
