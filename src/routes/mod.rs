//! Router assembly.

mod account;
mod common;

pub use account::account_routes;
pub use common::common_routes;

use crate::error::AppError;
use crate::response::json_error_body;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, middleware, Router};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

async fn not_found() -> AppError {
    AppError::NotFound("not found")
}

/// Full service: common and account routes, JSON 404 fallback, tracing and a
/// request body limit of `body_limit` bytes. Framework rejections (405, 413)
/// are rewritten into JSON error bodies.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(account_routes(state))
        .fallback(not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::map_response(json_error_body)),
        )
}
