// coursehub/src/store/traits.rs

//! Defines the store capabilities the services depend on.
//!
//! A store exposes two collections, courses and enrollments. Adapters (the
//! in-memory store here, PostgreSQL in the server crate) implement both plus a
//! connectivity probe, and are shared behind `Arc<dyn Store>`.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::id::RecordId;
use crate::models::{Course, CourseDraft, CourseFilter, CoursePatch, Enrollment, NewEnrollment};

/// Result of a partial update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Persists a validated course and returns the identifier the store assigned.
    async fn insert_course(&self, draft: CourseDraft) -> StoreResult<RecordId>;

    /// Returns every course matching `filter`. Order is store-defined.
    async fn find_courses(&self, filter: &CourseFilter) -> StoreResult<Vec<Course>>;

    async fn find_course(&self, id: &RecordId) -> StoreResult<Option<Course>>;

    /// Multi-get. Ids with no stored course are skipped; order is store-defined.
    async fn find_courses_by_ids(&self, ids: &[RecordId]) -> StoreResult<Vec<Course>>;

    /// Replaces only the fields present in `patch`.
    async fn update_course(&self, id: &RecordId, patch: &CoursePatch) -> StoreResult<UpdateOutcome>;

    /// Returns the number of removed records (0 or 1).
    async fn delete_course(&self, id: &RecordId) -> StoreResult<u64>;
}

#[async_trait]
pub trait EnrollmentStore: Send + Sync {
    /// Inserts the enrollment unless one already exists for the same
    /// (user email, course id) pair. Returns `None` on a duplicate.
    ///
    /// Implementations must make the check and the insert a single atomic step.
    async fn insert_enrollment_if_absent(&self, enrollment: NewEnrollment) -> StoreResult<Option<RecordId>>;

    async fn find_enrollments_by_user(&self, user_email: &str) -> StoreResult<Vec<Enrollment>>;
}

#[async_trait]
pub trait Store: CourseStore + EnrollmentStore {
    /// Cheap round-trip used by the health probe.
    async fn ping(&self) -> StoreResult<()>;
}
