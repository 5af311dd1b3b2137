//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - Bounded connection pool passed explicitly - no global handle
//! - Every write runs in its own transaction
//! - Report affected rows instead of check-then-delete

pub mod pool;
pub mod migrations;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, PoolConfig};
pub use repos::*;
