// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use coursehub::{CourseRepository, EnrollmentService, MemoryStore, NewCourse, RecordId, Store};
use std::sync::Arc;
use tracing::Level;

// --- Fixture wiring both services to one in-memory store ---
pub struct Fixture {
  pub store: Arc<MemoryStore>,
  pub courses: CourseRepository,
  pub enrollments: EnrollmentService,
}

pub fn fixture() -> Fixture {
  let store = Arc::new(MemoryStore::new());
  let shared: Arc<dyn Store> = store.clone();
  Fixture {
    store,
    courses: CourseRepository::new(shared.clone()),
    enrollments: EnrollmentService::new(shared),
  }
}

pub fn new_course(title: &str, category: &str, price: f64) -> NewCourse {
  NewCourse {
    title: Some(title.to_string()),
    price: Some(price),
    category: Some(category.to_string()),
    ..Default::default()
  }
}

pub fn full_course() -> NewCourse {
  NewCourse {
    title: Some("Rust for Backend Engineers".to_string()),
    image: Some("https://img.example.com/rust.png".to_string()),
    price: Some(49.99),
    duration: Some("6 weeks".to_string()),
    category: Some("Programming".to_string()),
    description: Some("Ownership, async and web services.".to_string()),
    is_featured: Some(true),
    instructor_name: Some("Sam Doe".to_string()),
    instructor_email: Some("sam@example.com".to_string()),
    instructor_photo: Some("https://img.example.com/sam.png".to_string()),
  }
}

pub async fn seed_course(fx: &Fixture, title: &str, category: &str) -> RecordId {
  fx.courses.create(new_course(title, category, 10.0)).await.unwrap()
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
