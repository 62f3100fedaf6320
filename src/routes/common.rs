//! Common routes: index, health, readiness.

use crate::handlers::common::{health, index, ready};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}
