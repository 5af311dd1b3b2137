//! Comment endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};

use crate::db::repos::{Comment, CommentPage, CommentRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{CommentId, ListQuery};
use crate::http::response::ApiResponse;
use crate::http::server::AppState;
use crate::models::CommentDraft;

/// GET /api/comment/get - list comments, newest first
async fn list_comments(
    State(state): State<Arc<AppState>>,
    ListQuery(page): ListQuery,
) -> Result<ApiResponse<CommentPage>, ApiError> {
    let result = CommentRepo::new(&state.pool).list(page).await?;
    Ok(ApiResponse::success(result))
}

/// POST /api/comment/add - create a comment and echo it back
async fn add_comment(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CommentDraft>, JsonRejection>,
) -> Result<ApiResponse<Comment>, ApiError> {
    let Json(draft) = payload.map_err(|e| {
        tracing::debug!(error = %e, "rejected comment body");
        ApiError::BadRequest {
            message: "invalid request body".to_owned(),
        }
    })?;

    let comment = CommentRepo::new(&state.pool).create(draft).await?;
    tracing::info!(id = comment.id, "comment added");

    Ok(ApiResponse::success(comment))
}

/// POST /api/comment/delete?id= - delete a comment
///
/// Zero affected rows is reported as not found; no prior lookup.
async fn delete_comment(
    State(state): State<Arc<AppState>>,
    CommentId(id): CommentId,
) -> Result<ApiResponse<()>, ApiError> {
    let removed = CommentRepo::new(&state.pool).delete(id).await?;
    if !removed {
        return Err(ApiError::NotFound { id });
    }

    tracing::info!(id, "comment deleted");
    Ok(ApiResponse::empty())
}

/// Comment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/comment/get", get(list_comments))
        .route("/api/comment/add", post(add_comment))
        .route("/api/comment/delete", post(delete_comment))
}
