// coursehub_server/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use coursehub::{CatalogError, StoreError};
use serde_json::{json, Value};
use thiserror::Error;

pub const ROUTE_NOT_FOUND: &str = "Route not found";

#[derive(Debug, Error)]
pub enum AppError {
  /// Failures from the course repository or the enrollment service.
  #[error(transparent)]
  Catalog(#[from] CatalogError),

  /// The store did not answer the health probe.
  #[error("Database connection failed: {0}")]
  HealthCheck(StoreError),

  /// Request body or query string could not be parsed.
  #[error("{message}: {detail}")]
  BadRequest { message: String, detail: String },

  #[error("Route not found")]
  RouteNotFound,

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Migration Error: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),
}

fn failure(message: &str, error: Option<String>) -> Value {
  match error {
    Some(error) => json!({ "success": false, "message": message, "error": error }),
    None => json!({ "success": false, "message": message }),
  }
}

impl AppError {
  /// The JSON envelope sent for this error.
  pub fn envelope(&self) -> Value {
    match self {
      AppError::Catalog(CatalogError::Store(source)) => failure("Database operation failed", Some(source.to_string())),
      AppError::Catalog(inner) => failure(&inner.to_string(), None),
      AppError::HealthCheck(source) => failure("Database connection failed", Some(source.to_string())),
      AppError::BadRequest { message, detail } => failure(message, Some(detail.clone())),
      AppError::RouteNotFound => failure(ROUTE_NOT_FOUND, None),
      AppError::Config(m) => failure("Configuration issue", Some(m.clone())),
      AppError::Sqlx(e) => failure("Database operation failed", Some(e.to_string())),
      AppError::Migration(e) => failure("Database migration failed", Some(e.to_string())),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Catalog(CatalogError::Validation(_))
      | AppError::Catalog(CatalogError::InvalidId(_))
      | AppError::Catalog(CatalogError::Conflict(_))
      | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
      AppError::Catalog(CatalogError::NotFound(_)) | AppError::RouteNotFound => StatusCode::NOT_FOUND,
      AppError::Catalog(CatalogError::Store(_))
      | AppError::HealthCheck(_)
      | AppError::Config(_)
      | AppError::Sqlx(_)
      | AppError::Migration(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    // Log the full error when it's turned into a response
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, status = status.as_u16(), "Responding with client error");
    }
    HttpResponse::build(status).json(self.envelope())
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
