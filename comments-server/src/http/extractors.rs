//! Custom Axum extractors
//!
//! Query parameters arrive as raw strings so that malformed values produce
//! an envelope error instead of axum's plain-text rejection.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use super::error::ApiError;
use crate::models::{Pagination, ValidationError, DEFAULT_PAGE, DEFAULT_SIZE};

#[derive(Debug, Default, Deserialize)]
struct RawListParams {
    page: Option<String>,
    size: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawIdParam {
    id: Option<String>,
}

/// Extract and validate `?page=&size=` into a [`Pagination`]
///
/// `page` defaults to 1 and must be >= 1; `size` defaults to 10 and must be
/// >= 1 or exactly -1 (all comments).
#[derive(Debug)]
pub struct ListQuery(pub Pagination);

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw): Query<RawListParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                message: e.body_text(),
            })?;

        let page = parse_param(raw.page.as_deref(), DEFAULT_PAGE).ok_or(
            ValidationError::InvalidParam {
                field: "page",
                reason: "must be an integer greater than 0",
            },
        )?;
        let size = parse_param(raw.size.as_deref(), DEFAULT_SIZE).ok_or(
            ValidationError::InvalidParam {
                field: "size",
                reason: "must be an integer greater than 0 or -1",
            },
        )?;

        Ok(Self(Pagination::from_query(page, size)?))
    }
}

/// Extract and validate a comment id from `?id=`
///
/// Missing or empty id is a validation error; anything that is not a
/// positive 32-bit integer is [`ApiError::InvalidId`].
#[derive(Debug)]
pub struct CommentId(pub u32);

impl<S> FromRequestParts<S> for CommentId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw): Query<RawIdParam> = Query::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                message: e.body_text(),
            })?;

        let raw_id = raw
            .id
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingParam { field: "id" })?;

        // u32's FromStr accepts a leading '+'; ids are plain digits only
        if !raw_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ApiError::InvalidId);
        }

        match raw_id.parse::<u32>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(ApiError::InvalidId),
        }
    }
}

/// Parse an optional integer parameter, falling back to `default` when absent.
fn parse_param(value: Option<&str>, default: i64) -> Option<i64> {
    match value {
        None => Some(default),
        Some(s) => s.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageSize;
    use axum::http::Request;

    async fn list_query(uri: &str) -> Result<ListQuery, ApiError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        ListQuery::from_request_parts(&mut parts, &()).await
    }

    async fn comment_id(uri: &str) -> Result<CommentId, ApiError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        CommentId::from_request_parts(&mut parts, &()).await
    }

    #[test]
    fn parse_param_defaults() {
        assert_eq!(parse_param(None, 10), Some(10));
        assert_eq!(parse_param(Some("-1"), 10), Some(-1));
        assert_eq!(parse_param(Some(""), 10), None);
        assert_eq!(parse_param(Some("abc"), 10), None);
    }

    #[tokio::test]
    async fn list_query_defaults() {
        let ListQuery(p) = list_query("/api/comment/get").await.unwrap();
        assert_eq!(p.page(), 1);
        assert_eq!(p.size(), PageSize::Limited(10));
    }

    #[tokio::test]
    async fn list_query_all() {
        let ListQuery(p) = list_query("/api/comment/get?page=3&size=-1").await.unwrap();
        assert_eq!(p.page(), 3);
        assert_eq!(p.size(), PageSize::Unlimited);
    }

    #[tokio::test]
    async fn list_query_rejects_garbage() {
        for uri in [
            "/api/comment/get?page=abc",
            "/api/comment/get?page=0",
            "/api/comment/get?size=0",
            "/api/comment/get?size=-5",
            "/api/comment/get?size=",
        ] {
            let err = list_query(uri).await.unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)), "{uri}");
        }
    }

    #[tokio::test]
    async fn comment_id_parses() {
        let CommentId(id) = comment_id("/api/comment/delete?id=42").await.unwrap();
        assert_eq!(id, 42);
    }

    #[tokio::test]
    async fn comment_id_missing() {
        for uri in ["/api/comment/delete", "/api/comment/delete?id="] {
            let err = comment_id(uri).await.unwrap_err();
            assert!(matches!(
                err,
                ApiError::Validation(ValidationError::MissingParam { field: "id" })
            ));
        }
    }

    #[tokio::test]
    async fn comment_id_rejects_non_positive() {
        for uri in [
            "/api/comment/delete?id=0",
            "/api/comment/delete?id=-3",
            "/api/comment/delete?id=abc",
            "/api/comment/delete?id=4294967296",
        ] {
            let err = comment_id(uri).await.unwrap_err();
            assert!(matches!(err, ApiError::InvalidId), "{uri}");
        }
    }

    #[tokio::test]
    async fn comment_id_rejects_signed() {
        // %2B decodes to '+', a bare '+' decodes to a space
        for uri in ["/api/comment/delete?id=%2B5", "/api/comment/delete?id=+5"] {
            let err = comment_id(uri).await.unwrap_err();
            assert!(matches!(err, ApiError::InvalidId), "{uri}");
        }
    }
}
