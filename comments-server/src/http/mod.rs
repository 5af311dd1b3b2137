//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing and timeout
//! - Graceful shutdown
//! - `{code, msg, data}` JSON envelope for every response

pub mod server;
pub mod error;
pub mod extractors;
pub mod response;
pub mod routes;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
pub use response::ApiResponse;
