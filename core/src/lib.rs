// src/lib.rs

//! coursehub: the course catalogue and enrollment domain.
//!
//! The crate provides:
//!  - `RecordId`, the store-agnostic identifier with parse/validate/storage-key operations.
//!  - The `Course` and `Enrollment` records, their client inputs, and the joined `EnrollmentView`.
//!  - The `Store` traits a persistence adapter implements, plus `MemoryStore`.
//!  - `CourseRepository` (CRUD over courses) and `EnrollmentService` (enroll, list-by-user join).
//!
//! HTTP and SQL live in the server crate; everything here is usable with any `Store`.

pub mod courses;
pub mod enrollments;
pub mod error;
pub mod id;
pub mod models;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::courses::CourseRepository;
pub use crate::enrollments::EnrollmentService;
pub use crate::error::{CatalogError, CatalogResult, StoreError, StoreResult};
pub use crate::id::{InvalidRecordId, RecordId};
pub use crate::models::{
    Course, CourseDraft, CourseFilter, CoursePatch, Enrollment, EnrollmentRequest, EnrollmentView, Listing,
    NewCourse, NewEnrollment,
};
pub use crate::store::{CourseStore, EnrollmentStore, MemoryStore, Store, UpdateOutcome};
