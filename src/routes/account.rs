//! Account CRUD routes.

use crate::handlers::account::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn account_routes(state: AppState) -> Router {
    Router::new()
        .route("/accounts", get(list).post(create))
        .route("/accounts/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
