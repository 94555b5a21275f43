// coursehub_server/src/state.rs
use coursehub::{CourseRepository, EnrollmentService, Store};
use std::sync::Arc;

/// Shared by every handler. Built once at startup around a single store handle.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn Store>,
  pub courses: CourseRepository,
  pub enrollments: EnrollmentService,
}

impl AppState {
  pub fn new(store: Arc<dyn Store>) -> Self {
    Self {
      courses: CourseRepository::new(store.clone()),
      enrollments: EnrollmentService::new(store.clone()),
      store,
    }
  }
}
