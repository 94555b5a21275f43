// coursehub/src/models/enrollment.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::models::course::Course;

/// A persisted enrollment linking a user (by email) to a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub user_email: String,
    pub course_id: RecordId,
    pub enrolled_at: DateTime<Utc>,
}

/// Enrollment input as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRequest {
    pub user_email: Option<String>,
    pub course_id: Option<String>,
}

/// A validated enrollment ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEnrollment {
    pub user_email: String,
    pub course_id: RecordId,
    pub enrolled_at: DateTime<Utc>,
}

impl NewEnrollment {
    pub fn into_enrollment(self, id: RecordId) -> Enrollment {
        Enrollment {
            id,
            user_email: self.user_email,
            course_id: self.course_id,
            enrolled_at: self.enrolled_at,
        }
    }
}

/// An enrollment with its course embedded, computed at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentView {
    pub enrollment_id: RecordId,
    pub user_email: String,
    pub enrolled_at: DateTime<Utc>,
    pub course: Course,
}

impl EnrollmentView {
    pub fn join(enrollment: Enrollment, course: Course) -> Self {
        EnrollmentView {
            enrollment_id: enrollment.id,
            user_email: enrollment.user_email,
            enrolled_at: enrollment.enrolled_at,
            course,
        }
    }
}
