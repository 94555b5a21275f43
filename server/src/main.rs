// coursehub_server/src/main.rs

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use anyhow::Context;
use coursehub_server::config::{AppConfig, LogFormat};
use coursehub_server::db::{self, PgStore};
use coursehub_server::seed;
use coursehub_server::state::AppState;
use coursehub_server::web::{configure_app_routes, route_not_found};
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
  // RUST_LOG overrides the default `info` level.
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  match format {
    LogFormat::Json => builder.json().init(),
    LogFormat::Pretty => builder.init(),
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;
  init_tracing(app_config.log_format);
  tracing::info!("Starting course API server...");

  // The server does not start without a reachable, migrated store.
  let db_pool = db::connect(&app_config)
    .await
    .inspect_err(|e| tracing::error!(error = %e, "Failed to connect to the database."))
    .context("Database connection error")?;
  db::run_migrations(&db_pool)
    .await
    .inspect_err(|e| tracing::error!(error = %e, "Failed to apply database migrations."))
    .context("Database migration error")?;

  let app_state = AppState::new(Arc::new(PgStore::new(db_pool)));

  if app_config.seed_db {
    seed::seed_demo_courses(&app_state.courses)
      .await
      .context("Failed to seed demo courses")?;
  }

  let server_address = (app_config.server_host.clone(), app_config.server_port);
  tracing::info!("Attempting to bind server to {}:{}...", server_address.0, server_address.1);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
      .default_service(actix_data::to(route_not_found))
  })
  .bind(server_address)?
  .run()
  .await?;

  Ok(())
}
