// coursehub_server/src/web/handlers/health_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;
use coursehub::Store;

pub async fn root_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({
      "success": true,
      "message": "Course API is running"
  }))
}

/// Probes the store. An unreachable store is reported as a 500, never fatal.
#[instrument(name = "handler::health_check", skip(app_state))]
pub async fn health_check_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  app_state.store.ping().await.map_err(AppError::HealthCheck)?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": "Server is healthy",
      "database": "connected"
  })))
}
