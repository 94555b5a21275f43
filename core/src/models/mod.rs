// coursehub/src/models/mod.rs

//! Contains the records stored in the `courses` and `enrollments` collections,
//! their client-facing inputs, and the joined enrollment view.

pub mod course;
pub mod enrollment;

pub use course::{Course, CourseDraft, CourseFilter, CoursePatch, NewCourse};
pub use enrollment::{Enrollment, EnrollmentRequest, EnrollmentView, NewEnrollment};

/// A sequence of records together with its length, as returned by list operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub count: usize,
    pub items: Vec<T>,
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(items: Vec<T>) -> Self {
        Listing {
            count: items.len(),
            items,
        }
    }
}
