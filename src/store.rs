//! Account persistence: the `AccountStore` repository and database bootstrap helpers.

mod memory;
mod postgres;

pub use memory::InMemoryAccountStore;
pub use postgres::PgAccountStore;

use crate::error::{AppError, ConfigError};
use crate::model::{Account, NewAccount};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use std::str::FromStr;

/// Table holding one row per account.
pub const ACCOUNTS_TABLE: &str = "accounts";

/// Per-record persistence operations. Each call is a single statement; there is
/// no multi-record transaction.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert and return the record with its store-assigned id.
    async fn create(&self, account: NewAccount) -> Result<Account, AppError>;

    /// Persist every mutable field of an existing record. A missing row is
    /// `AppError::Db(sqlx::Error::RowNotFound)`.
    async fn update(&self, account: &Account) -> Result<Account, AppError>;

    async fn delete(&self, id: i32) -> Result<(), AppError>;

    async fn find(&self, id: i32) -> Result<Option<Account>, AppError>;

    /// Records whose name matches exactly, ordered by id.
    async fn find_by_name(&self, name: &str) -> Result<Vec<Account>, AppError>;

    /// Every record, ordered by id.
    async fn all(&self) -> Result<Vec<Account>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

/// Create the target database when it does not exist yet. Connects to the
/// `postgres` admin database on the same server with the same credentials and
/// TLS settings; a no-op when the URI names no database or names `postgres`.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin, db_name)) = admin_target(database_url)? else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Admin connection options and the target database name, or `None` when
/// there is nothing to create.
fn admin_target(database_url: &str) -> Result<Option<(PgConnectOptions, String)>, ConfigError> {
    let opts = PgConnectOptions::from_str(database_url)
        .map_err(|e| ConfigError::DatabaseUri(e.to_string()))?;
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some((opts.database("postgres"), db_name)))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
