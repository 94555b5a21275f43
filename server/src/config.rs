// coursehub_server/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub db_max_connections: u32,
  pub log_format: LogFormat,

  // Optional: insert demo courses on startup when the catalogue is empty
  pub seed_db: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the configuration from any variable source. `from_env` passes the
  /// process environment; tests pass a map.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_env = |var_name: &str| {
      lookup(var_name).ok_or_else(|| AppError::Config(format!("Missing environment variable '{}'", var_name)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    // PORT wins over SERVER_PORT so the usual hosting convention works unchanged.
    let server_port = get_env("PORT")
      .or_else(|_| get_env("SERVER_PORT"))
      .unwrap_or_else(|_| "5000".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;
    let db_max_connections = get_env("DB_MAX_CONNECTIONS")
      .unwrap_or_else(|_| "10".to_string())
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DB_MAX_CONNECTIONS: {}", e)))?;

    let log_format = match get_env("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()).as_str() {
      "pretty" => LogFormat::Pretty,
      "json" => LogFormat::Json,
      other => {
        return Err(AppError::Config(format!(
          "Invalid LOG_FORMAT '{}': expected 'pretty' or 'json'",
          other
        )))
      }
    };

    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    Ok(Self {
      server_host,
      server_port,
      database_url,
      db_max_connections,
      log_format,
      seed_db,
    })
  }
}
