//! PostgreSQL-backed `AccountStore`.

use super::{AccountStore, ACCOUNTS_TABLE};
use crate::error::AppError;
use crate::model::{Account, NewAccount};
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, email, address, phone_number, date_joined";

#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create(&self, account: NewAccount) -> Result<Account, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, email, address, phone_number, date_joined) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            ACCOUNTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Account>(&sql)
            .bind(&account.name)
            .bind(&account.email)
            .bind(&account.address)
            .bind(&account.phone_number)
            .bind(account.date_joined)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, account: &Account) -> Result<Account, AppError> {
        let sql = format!(
            "UPDATE {} SET name = $1, email = $2, address = $3, phone_number = $4, date_joined = $5 \
             WHERE id = $6 RETURNING {}",
            ACCOUNTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id = account.id, "query");
        let row = sqlx::query_as::<_, Account>(&sql)
            .bind(&account.name)
            .bind(&account.email)
            .bind(&account.address)
            .bind(&account.phone_number)
            .bind(account.date_joined)
            .bind(account.id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        tracing::debug!(id, "delete account");
        sqlx::query(&format!("DELETE FROM {} WHERE id = $1", ACCOUNTS_TABLE))
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find(&self, id: i32) -> Result<Option<Account>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, ACCOUNTS_TABLE);
        let row = sqlx::query_as::<_, Account>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Account>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE name = $1 ORDER BY id", COLUMNS, ACCOUNTS_TABLE);
        let rows = sqlx::query_as::<_, Account>(&sql)
            .bind(name)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn all(&self) -> Result<Vec<Account>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, ACCOUNTS_TABLE);
        let rows = sqlx::query_as::<_, Account>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
