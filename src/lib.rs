//! Account REST API service: CRUD over a single Account entity backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServiceConfig;
pub use error::{AppError, ConfigError, PayloadError};
pub use migration::apply_migrations;
pub use model::{Account, NewAccount};
pub use routes::{account_routes, app, common_routes};
pub use service::AccountForm;
pub use state::AppState;
pub use store::{ensure_database_exists, AccountStore, InMemoryAccountStore, PgAccountStore};
