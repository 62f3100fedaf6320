//! Schema bootstrap for the accounts table. Idempotent; safe to run on every start.

use crate::error::AppError;
use crate::store::ACCOUNTS_TABLE;
use sqlx::PgPool;

fn accounts_ddl() -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            name VARCHAR(64) NOT NULL,
            email VARCHAR(64) NOT NULL,
            address VARCHAR(256) NOT NULL,
            phone_number VARCHAR(32) NOT NULL,
            date_joined DATE NOT NULL DEFAULT CURRENT_DATE
        )
        "#,
        ACCOUNTS_TABLE
    )
}

pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(&accounts_ddl()).execute(pool).await?;
    let index = format!(
        "CREATE INDEX IF NOT EXISTS {0}_name_idx ON {0} (name)",
        ACCOUNTS_TABLE
    );
    sqlx::query(&index).execute(pool).await?;
    tracing::info!(table = ACCOUNTS_TABLE, "migrations applied");
    Ok(())
}
