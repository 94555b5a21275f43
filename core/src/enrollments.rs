// coursehub/src/enrollments.rs

//! Defines `EnrollmentService`: creating enrollments and listing a user's
//! enrollments joined with their courses.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::courses::{parse_course_id, COURSE_NOT_FOUND};
use crate::error::{CatalogError, CatalogResult};
use crate::id::RecordId;
use crate::models::{Course, EnrollmentRequest, EnrollmentView, Listing, NewEnrollment};
use crate::store::{CourseStore, EnrollmentStore, Store};

pub const ENROLLMENT_FIELDS_REQUIRED: &str = "User email and course ID are required";
pub const USER_EMAIL_REQUIRED: &str = "User email is required";
pub const ALREADY_ENROLLED: &str = "Already enrolled in this course";

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Clone)]
pub struct EnrollmentService {
    store: Arc<dyn Store>,
}

impl EnrollmentService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Enrolls a user in an existing course.
    ///
    /// Checks run in order: required fields, course id format, course existence,
    /// then the (user email, course id) uniqueness enforced by the store's
    /// conditional insert.
    #[instrument(name = "enrollments::enroll", skip(self, request), err(Display))]
    pub async fn enroll(&self, request: EnrollmentRequest) -> CatalogResult<RecordId> {
        let (Some(user_email), Some(raw_course_id)) = (present(request.user_email), present(request.course_id)) else {
            return Err(CatalogError::Validation(ENROLLMENT_FIELDS_REQUIRED.to_string()));
        };
        let course_id = parse_course_id(&raw_course_id)?;

        if self.store.find_course(&course_id).await?.is_none() {
            warn!(%course_id, "Enrollment refused: course does not exist.");
            return Err(CatalogError::NotFound(COURSE_NOT_FOUND.to_string()));
        }

        let new_enrollment = NewEnrollment {
            user_email,
            course_id,
            enrolled_at: Utc::now(),
        };
        match self.store.insert_enrollment_if_absent(new_enrollment).await? {
            Some(id) => {
                info!(enrollment_id = %id, %course_id, "Enrollment created.");
                Ok(id)
            }
            None => Err(CatalogError::Conflict(ALREADY_ENROLLED.to_string())),
        }
    }

    /// Lists the user's enrollments with their courses embedded.
    ///
    /// Courses are fetched with one multi-get over the distinct course ids.
    /// Enrollments whose course no longer exists are dropped from the result.
    #[instrument(name = "enrollments::list_by_user", skip(self), err(Display))]
    pub async fn list_by_user(&self, user_email: Option<&str>) -> CatalogResult<Listing<EnrollmentView>> {
        let Some(user_email) = user_email.filter(|e| !e.trim().is_empty()) else {
            return Err(CatalogError::Validation(USER_EMAIL_REQUIRED.to_string()));
        };

        let enrollments = self.store.find_enrollments_by_user(user_email).await?;
        if enrollments.is_empty() {
            return Ok(Listing::from(Vec::new()));
        }

        let mut seen = HashSet::new();
        let course_ids: Vec<RecordId> = enrollments
            .iter()
            .map(|e| e.course_id)
            .filter(|id| seen.insert(*id))
            .collect();
        let courses: HashMap<RecordId, Course> = self
            .store
            .find_courses_by_ids(&course_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let total = enrollments.len();
        let views: Vec<EnrollmentView> = enrollments
            .into_iter()
            .filter_map(|e| courses.get(&e.course_id).cloned().map(|c| EnrollmentView::join(e, c)))
            .collect();
        if views.len() < total {
            warn!(
                dropped = total - views.len(),
                "Dropped enrollments whose course no longer exists."
            );
        }
        Ok(Listing::from(views))
    }
}
