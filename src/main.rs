//! Account service binary: reads settings from the environment, prepares the
//! database, and serves the account routes.

use account_service::{
    app, apply_migrations, config::DEFAULT_LOG_FILTER, ensure_database_exists, AppState, PgAccountStore,
    ServiceConfig,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    ensure_database_exists(&config.database_uri).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database_uri)
        .await?;
    apply_migrations(&pool).await?;

    let state = AppState::new(PgAccountStore::new(pool));
    let router = app(state, config.body_limit);

    let listener = TcpListener::bind(config.socket_addr()?).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
