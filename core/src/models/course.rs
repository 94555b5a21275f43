// coursehub/src/models/course.rs

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::id::RecordId;

pub const COURSE_FIELDS_REQUIRED: &str = "Title, price, and category are required";

/// A persisted course record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_photo: Option<String>,
}

/// Course creation input as received from a client. Every field is optional here;
/// `validate` enforces the presence rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub title: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub is_featured: Option<bool>,
    pub instructor_name: Option<String>,
    pub instructor_email: Option<String>,
    pub instructor_photo: Option<String>,
}

/// A validated course that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseDraft {
    pub title: String,
    pub image: Option<String>,
    pub price: f64,
    pub duration: Option<String>,
    pub category: String,
    pub description: Option<String>,
    pub is_featured: bool,
    pub instructor_name: Option<String>,
    pub instructor_email: Option<String>,
    pub instructor_photo: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl NewCourse {
    /// Checks that title, price and category are present and fills `is_featured`.
    pub fn validate(self) -> Result<CourseDraft, CatalogError> {
        let (Some(title), Some(price), Some(category)) = (present(self.title), self.price, present(self.category))
        else {
            return Err(CatalogError::Validation(COURSE_FIELDS_REQUIRED.to_string()));
        };

        Ok(CourseDraft {
            title,
            image: self.image,
            price,
            duration: self.duration,
            category,
            description: self.description,
            is_featured: self.is_featured.unwrap_or(false),
            instructor_name: self.instructor_name,
            instructor_email: self.instructor_email,
            instructor_photo: self.instructor_photo,
        })
    }
}

impl CourseDraft {
    pub fn into_course(self, id: RecordId) -> Course {
        Course {
            id,
            title: self.title,
            image: self.image,
            price: self.price,
            duration: self.duration,
            category: self.category,
            description: self.description,
            is_featured: self.is_featured,
            instructor_name: self.instructor_name,
            instructor_email: self.instructor_email,
            instructor_photo: self.instructor_photo,
        }
    }
}

/// Partial course update. Absent (or `null`) fields keep their stored values.
///
/// There is deliberately no identifier field: `_id`/`id` keys in an update body are
/// dropped during deserialization, so a record's identifier can never change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePatch {
    pub title: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub is_featured: Option<bool>,
    pub instructor_name: Option<String>,
    pub instructor_email: Option<String>,
    pub instructor_photo: Option<String>,
}

fn merge<T: PartialEq + Clone>(slot: &mut T, value: &Option<T>) -> bool {
    match value {
        Some(v) if slot != v => {
            *slot = v.clone();
            true
        }
        _ => false,
    }
}

fn merge_opt<T: PartialEq + Clone>(slot: &mut Option<T>, value: &Option<T>) -> bool {
    match value {
        Some(v) if slot.as_ref() != Some(v) => {
            *slot = Some(v.clone());
            true
        }
        _ => false,
    }
}

impl CoursePatch {
    pub fn is_empty(&self) -> bool {
        *self == CoursePatch::default()
    }

    /// Applies the patch in place and reports whether any stored value changed.
    pub fn apply_to(&self, course: &mut Course) -> bool {
        // Non-short-circuiting `|` so every field is merged.
        merge(&mut course.title, &self.title)
            | merge_opt(&mut course.image, &self.image)
            | merge(&mut course.price, &self.price)
            | merge_opt(&mut course.duration, &self.duration)
            | merge(&mut course.category, &self.category)
            | merge_opt(&mut course.description, &self.description)
            | merge(&mut course.is_featured, &self.is_featured)
            | merge_opt(&mut course.instructor_name, &self.instructor_name)
            | merge_opt(&mut course.instructor_email, &self.instructor_email)
            | merge_opt(&mut course.instructor_photo, &self.instructor_photo)
    }
}

/// Filter for listing courses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    /// Exact category match.
    pub category: Option<String>,
}

impl CourseFilter {
    pub fn matches(&self, course: &Course) -> bool {
        self.category.as_deref().map_or(true, |c| course.category == c)
    }
}
