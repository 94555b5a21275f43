// coursehub_server/src/db/mod.rs

//! Database bootstrap: pool creation, schema migrations, and the `PgStore` adapter.

pub mod pg_store;

pub use pg_store::PgStore;

use crate::config::AppConfig;
use crate::errors::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Opens the connection pool and verifies the store is reachable.
///
/// Called once at startup; a failure here is fatal for the process.
pub async fn connect(config: &AppConfig) -> Result<PgPool> {
  let pool = PgPoolOptions::new()
    .max_connections(config.db_max_connections)
    .connect(&config.database_url)
    .await?;
  info!(max_connections = config.db_max_connections, "Successfully connected to the database.");
  Ok(pool)
}

/// Applies the embedded migrations under `server/migrations`.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
  sqlx::migrate!("./migrations").run(pool).await?;
  info!("Database migrations applied.");
  Ok(())
}
