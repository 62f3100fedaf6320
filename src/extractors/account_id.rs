//! Extract the account id from the `/accounts/:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Non-negative integer id. Anything else does not match the route and is
/// rejected as a plain 404.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountId(pub i32);

impl AccountId {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse().ok().map(AccountId)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AccountId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound("not found"))?;
        AccountId::parse(&raw).ok_or(AppError::NotFound("not found"))
    }
}
