// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use coursehub::MemoryStore;
use coursehub_server::state::AppState;
use serde_json::{json, Value};
use std::sync::Arc;

/// Builds the full application (routes, extractor configs, fallback) around `$state`
/// and initializes it as an actix test service.
macro_rules! init_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state))
        .configure(coursehub_server::web::configure_app_routes)
        .default_service(actix_web::web::to(coursehub_server::web::route_not_found)),
    )
    .await
  };
}

/// Sends `$req` to `$app` and returns `(status, json body)`.
macro_rules! send {
  ($app:expr, $req:expr) => {{
    let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
    let status = resp.status();
    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    (status, body)
  }};
}

pub fn memory_state() -> (Arc<MemoryStore>, AppState) {
  let store = Arc::new(MemoryStore::new());
  let state = AppState::new(store.clone());
  (store, state)
}

pub fn intro_course() -> Value {
  json!({ "title": "Intro", "price": 10, "category": "Dev" })
}

pub fn full_course() -> Value {
  json!({
    "title": "Complete Web Development",
    "image": "https://images.example.com/web.jpg",
    "price": 49.99,
    "duration": "40 hours",
    "category": "Development",
    "description": "HTML, CSS, JavaScript and a REST backend.",
    "instructorName": "Alex Morgan",
    "instructorEmail": "alex@example.com",
    "instructorPhoto": "https://images.example.com/alex.png"
  })
}
