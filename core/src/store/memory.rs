// coursehub/src/store/memory.rs

//! An in-memory `Store` keeping both collections in insertion order.
//!
//! Used by the test suites and for running the server without a database.
//! `set_available(false)` makes every operation fail with
//! `StoreError::Unavailable`, which is how connectivity failures are simulated.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::id::RecordId;
use crate::models::{Course, CourseDraft, CourseFilter, CoursePatch, Enrollment, NewEnrollment};
use crate::store::traits::{CourseStore, EnrollmentStore, Store, UpdateOutcome};

#[derive(Debug, Default)]
struct Collections {
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
}

#[derive(Debug)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
    available: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            collections: RwLock::new(Collections::default()),
            available: AtomicBool::new(true),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn course_count(&self) -> usize {
        self.collections.read().courses.len()
    }

    pub fn enrollment_count(&self) -> usize {
        self.collections.read().enrollments.len()
    }

    fn ensure_available(&self) -> StoreResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("in-memory store is offline".to_string()))
        }
    }
}

#[async_trait]
impl CourseStore for MemoryStore {
    async fn insert_course(&self, draft: CourseDraft) -> StoreResult<RecordId> {
        self.ensure_available()?;
        let id = RecordId::generate();
        self.collections.write().courses.push(draft.into_course(id));
        debug!(course_id = %id, "Inserted course into memory store.");
        Ok(id)
    }

    async fn find_courses(&self, filter: &CourseFilter) -> StoreResult<Vec<Course>> {
        self.ensure_available()?;
        let guard = self.collections.read();
        Ok(guard.courses.iter().filter(|c| filter.matches(c)).cloned().collect())
    }

    async fn find_course(&self, id: &RecordId) -> StoreResult<Option<Course>> {
        self.ensure_available()?;
        let guard = self.collections.read();
        Ok(guard.courses.iter().find(|c| c.id == *id).cloned())
    }

    async fn find_courses_by_ids(&self, ids: &[RecordId]) -> StoreResult<Vec<Course>> {
        self.ensure_available()?;
        let wanted: HashSet<&RecordId> = ids.iter().collect();
        let guard = self.collections.read();
        Ok(guard.courses.iter().filter(|c| wanted.contains(&c.id)).cloned().collect())
    }

    async fn update_course(&self, id: &RecordId, patch: &CoursePatch) -> StoreResult<UpdateOutcome> {
        self.ensure_available()?;
        let mut guard = self.collections.write();
        let outcome = match guard.courses.iter_mut().find(|c| c.id == *id) {
            Some(course) => UpdateOutcome {
                matched: 1,
                modified: u64::from(patch.apply_to(course)),
            },
            None => UpdateOutcome::default(),
        };
        Ok(outcome)
    }

    async fn delete_course(&self, id: &RecordId) -> StoreResult<u64> {
        self.ensure_available()?;
        let mut guard = self.collections.write();
        let before = guard.courses.len();
        guard.courses.retain(|c| c.id != *id);
        Ok((before - guard.courses.len()) as u64)
    }
}

#[async_trait]
impl EnrollmentStore for MemoryStore {
    async fn insert_enrollment_if_absent(&self, enrollment: NewEnrollment) -> StoreResult<Option<RecordId>> {
        self.ensure_available()?;
        // Check and insert under one write lock.
        let mut guard = self.collections.write();
        let duplicate = guard
            .enrollments
            .iter()
            .any(|e| e.user_email == enrollment.user_email && e.course_id == enrollment.course_id);
        if duplicate {
            return Ok(None);
        }
        let id = RecordId::generate();
        guard.enrollments.push(enrollment.into_enrollment(id));
        Ok(Some(id))
    }

    async fn find_enrollments_by_user(&self, user_email: &str) -> StoreResult<Vec<Enrollment>> {
        self.ensure_available()?;
        let guard = self.collections.read();
        Ok(guard
            .enrollments
            .iter()
            .filter(|e| e.user_email == user_email)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        self.ensure_available()
    }
}
