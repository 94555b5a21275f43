// coursehub/src/courses.rs

//! Defines `CourseRepository`, the CRUD operations over the `courses` collection.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::id::RecordId;
use crate::models::{Course, CourseFilter, CoursePatch, Listing, NewCourse};
use crate::store::{CourseStore, Store};

pub const INVALID_COURSE_ID: &str = "Invalid course ID format";
pub const COURSE_NOT_FOUND: &str = "Course not found";

/// Parses a client-supplied course id, mapping failures to `CatalogError::InvalidId`.
pub fn parse_course_id(raw: &str) -> CatalogResult<RecordId> {
    RecordId::parse(raw).map_err(|e| {
        debug!(error = %e, "Rejected course id.");
        CatalogError::InvalidId(INVALID_COURSE_ID.to_string())
    })
}

#[derive(Clone)]
pub struct CourseRepository {
    store: Arc<dyn Store>,
}

impl CourseRepository {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Validates and persists a new course. Nothing is written when validation fails.
    #[instrument(name = "courses::create", skip(self, input), err(Display))]
    pub async fn create(&self, input: NewCourse) -> CatalogResult<RecordId> {
        let draft = input.validate().inspect_err(|e| warn!("Course creation rejected: {}", e))?;
        let id = self.store.insert_course(draft).await?;
        info!(course_id = %id, "Course created.");
        Ok(id)
    }

    /// Lists courses, optionally restricted to an exact category. An empty
    /// category string is treated as no filter.
    #[instrument(name = "courses::list", skip(self), err(Display))]
    pub async fn list(&self, category: Option<&str>) -> CatalogResult<Listing<Course>> {
        let filter = CourseFilter {
            category: category.filter(|c| !c.is_empty()).map(str::to_string),
        };
        let courses = self.store.find_courses(&filter).await?;
        debug!("Fetched {} courses.", courses.len());
        Ok(Listing::from(courses))
    }

    #[instrument(name = "courses::get", skip(self), err(Display))]
    pub async fn get(&self, raw_id: &str) -> CatalogResult<Course> {
        let id = parse_course_id(raw_id)?;
        self.store
            .find_course(&id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(COURSE_NOT_FOUND.to_string()))
    }

    /// Applies a partial update and returns how many records actually changed.
    ///
    /// A matched record whose values already equal the patch yields `Ok(0)`;
    /// only an unmatched id is `NotFound`.
    #[instrument(name = "courses::update", skip(self, patch), err(Display))]
    pub async fn update(&self, raw_id: &str, patch: CoursePatch) -> CatalogResult<u64> {
        let id = parse_course_id(raw_id)?;
        let outcome = self.store.update_course(&id, &patch).await?;
        if outcome.matched == 0 {
            return Err(CatalogError::NotFound(COURSE_NOT_FOUND.to_string()));
        }
        info!(course_id = %id, modified = outcome.modified, "Course updated.");
        Ok(outcome.modified)
    }

    #[instrument(name = "courses::delete", skip(self), err(Display))]
    pub async fn delete(&self, raw_id: &str) -> CatalogResult<()> {
        let id = parse_course_id(raw_id)?;
        if self.store.delete_course(&id).await? == 0 {
            return Err(CatalogError::NotFound(COURSE_NOT_FOUND.to_string()));
        }
        info!(course_id = %id, "Course deleted.");
        Ok(())
    }
}
