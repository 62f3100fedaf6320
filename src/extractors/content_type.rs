//! Content-Type guard for endpoints that only accept one media type.

use crate::error::AppError;
use axum::http::{header, HeaderMap};

pub const APPLICATION_JSON: &str = "application/json";

/// Pass only when the `Content-Type` header equals `media_type` exactly.
/// Parameters such as `; charset=utf-8` are not tolerated.
pub fn require_content_type(headers: &HeaderMap, media_type: &'static str) -> Result<(), AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    if content_type == Some(media_type) {
        return Ok(());
    }
    tracing::error!(content_type = ?content_type, "Invalid Content-Type");
    Err(AppError::UnsupportedMediaType(media_type))
}
