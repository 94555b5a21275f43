// coursehub_server/src/db/pg_store.rs

//! PostgreSQL implementation of coursehub's `Store` traits on top of a `PgPool`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use coursehub::{
  Course, CourseDraft, CourseFilter, CoursePatch, CourseStore, Enrollment, EnrollmentStore, NewEnrollment, RecordId,
  Store, StoreError, StoreResult, UpdateOutcome,
};
use sqlx::{FromRow, PgPool};
use tracing::{error, instrument};
use uuid::Uuid;

const COURSE_COLUMNS: &str = "id, title, image, price, duration, category, description, is_featured, \
   instructor_name, instructor_email, instructor_photo";

// Locks the target row, applies COALESCE(param, current) per column and only
// rewrites the row when the merged values differ. Returns matched and modified
// counts in one round-trip.
const UPDATE_COURSE_SQL: &str = r#"
WITH target AS (
  SELECT * FROM courses WHERE id = $1 FOR UPDATE
),
changed AS (
  UPDATE courses AS c SET
    title = COALESCE($2, t.title),
    image = COALESCE($3, t.image),
    price = COALESCE($4, t.price),
    duration = COALESCE($5, t.duration),
    category = COALESCE($6, t.category),
    description = COALESCE($7, t.description),
    is_featured = COALESCE($8, t.is_featured),
    instructor_name = COALESCE($9, t.instructor_name),
    instructor_email = COALESCE($10, t.instructor_email),
    instructor_photo = COALESCE($11, t.instructor_photo)
  FROM target AS t
  WHERE c.id = t.id
    AND (t.title, t.image, t.price, t.duration, t.category, t.description, t.is_featured,
         t.instructor_name, t.instructor_email, t.instructor_photo)
      IS DISTINCT FROM
        (COALESCE($2, t.title), COALESCE($3, t.image), COALESCE($4, t.price), COALESCE($5, t.duration),
         COALESCE($6, t.category), COALESCE($7, t.description), COALESCE($8, t.is_featured),
         COALESCE($9, t.instructor_name), COALESCE($10, t.instructor_email), COALESCE($11, t.instructor_photo))
  RETURNING c.id
)
SELECT (SELECT COUNT(*) FROM target) AS matched, (SELECT COUNT(*) FROM changed) AS modified
"#;

#[derive(Debug, FromRow)]
struct CourseRow {
  id: Uuid,
  title: String,
  image: Option<String>,
  price: f64,
  duration: Option<String>,
  category: String,
  description: Option<String>,
  is_featured: bool,
  instructor_name: Option<String>,
  instructor_email: Option<String>,
  instructor_photo: Option<String>,
}

impl From<CourseRow> for Course {
  fn from(row: CourseRow) -> Self {
    Course {
      id: RecordId::from(row.id),
      title: row.title,
      image: row.image,
      price: row.price,
      duration: row.duration,
      category: row.category,
      description: row.description,
      is_featured: row.is_featured,
      instructor_name: row.instructor_name,
      instructor_email: row.instructor_email,
      instructor_photo: row.instructor_photo,
    }
  }
}

#[derive(Debug, FromRow)]
struct EnrollmentRow {
  id: Uuid,
  user_email: String,
  course_id: Uuid,
  enrolled_at: DateTime<Utc>,
}

impl From<EnrollmentRow> for Enrollment {
  fn from(row: EnrollmentRow) -> Self {
    Enrollment {
      id: RecordId::from(row.id),
      user_email: row.user_email,
      course_id: RecordId::from(row.course_id),
      enrolled_at: row.enrolled_at,
    }
  }
}

#[derive(Debug, FromRow)]
struct UpdateCountsRow {
  matched: i64,
  modified: i64,
}

fn db_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> StoreError {
  move |e| {
    error!(operation, error = %e, "Database operation failed.");
    StoreError::backend(e)
  }
}

#[derive(Clone)]
pub struct PgStore {
  pool: PgPool,
}

impl PgStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl CourseStore for PgStore {
  #[instrument(name = "pg::insert_course", skip(self, draft))]
  async fn insert_course(&self, draft: CourseDraft) -> StoreResult<RecordId> {
    let (id,): (Uuid,) = sqlx::query_as(
      "INSERT INTO courses (title, image, price, duration, category, description, is_featured, \
         instructor_name, instructor_email, instructor_photo) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING id",
    )
    .bind(draft.title)
    .bind(draft.image)
    .bind(draft.price)
    .bind(draft.duration)
    .bind(draft.category)
    .bind(draft.description)
    .bind(draft.is_featured)
    .bind(draft.instructor_name)
    .bind(draft.instructor_email)
    .bind(draft.instructor_photo)
    .fetch_one(&self.pool)
    .await
    .map_err(db_error("insert_course"))?;
    Ok(RecordId::from(id))
  }

  #[instrument(name = "pg::find_courses", skip(self))]
  async fn find_courses(&self, filter: &CourseFilter) -> StoreResult<Vec<Course>> {
    let rows: Vec<CourseRow> = match &filter.category {
      Some(category) => {
        sqlx::query_as::<_, CourseRow>(&format!(
          "SELECT {COURSE_COLUMNS} FROM courses WHERE category = $1 ORDER BY created_at"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await
      }
      None => {
        sqlx::query_as::<_, CourseRow>(&format!("SELECT {COURSE_COLUMNS} FROM courses ORDER BY created_at"))
          .fetch_all(&self.pool)
          .await
      }
    }
    .map_err(db_error("find_courses"))?;
    Ok(rows.into_iter().map(Course::from).collect())
  }

  #[instrument(name = "pg::find_course", skip(self), fields(course_id = %id))]
  async fn find_course(&self, id: &RecordId) -> StoreResult<Option<Course>> {
    let row: Option<CourseRow> = sqlx::query_as(&format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1"))
      .bind(id.to_storage_key())
      .fetch_optional(&self.pool)
      .await
      .map_err(db_error("find_course"))?;
    Ok(row.map(Course::from))
  }

  #[instrument(name = "pg::find_courses_by_ids", skip(self, ids), fields(ids = ids.len()))]
  async fn find_courses_by_ids(&self, ids: &[RecordId]) -> StoreResult<Vec<Course>> {
    let keys: Vec<Uuid> = ids.iter().map(RecordId::to_storage_key).collect();
    let rows: Vec<CourseRow> = sqlx::query_as(&format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = ANY($1)"))
      .bind(keys)
      .fetch_all(&self.pool)
      .await
      .map_err(db_error("find_courses_by_ids"))?;
    Ok(rows.into_iter().map(Course::from).collect())
  }

  #[instrument(name = "pg::update_course", skip(self, patch), fields(course_id = %id))]
  async fn update_course(&self, id: &RecordId, patch: &CoursePatch) -> StoreResult<UpdateOutcome> {
    if patch.is_empty() {
      let matched = self.find_course(id).await?.map_or(0, |_| 1);
      return Ok(UpdateOutcome { matched, modified: 0 });
    }

    let counts: UpdateCountsRow = sqlx::query_as(UPDATE_COURSE_SQL)
      .bind(id.to_storage_key())
      .bind(patch.title.as_deref())
      .bind(patch.image.as_deref())
      .bind(patch.price)
      .bind(patch.duration.as_deref())
      .bind(patch.category.as_deref())
      .bind(patch.description.as_deref())
      .bind(patch.is_featured)
      .bind(patch.instructor_name.as_deref())
      .bind(patch.instructor_email.as_deref())
      .bind(patch.instructor_photo.as_deref())
      .fetch_one(&self.pool)
      .await
      .map_err(db_error("update_course"))?;

    Ok(UpdateOutcome {
      matched: u64::try_from(counts.matched).unwrap_or_default(),
      modified: u64::try_from(counts.modified).unwrap_or_default(),
    })
  }

  #[instrument(name = "pg::delete_course", skip(self), fields(course_id = %id))]
  async fn delete_course(&self, id: &RecordId) -> StoreResult<u64> {
    let result = sqlx::query("DELETE FROM courses WHERE id = $1")
      .bind(id.to_storage_key())
      .execute(&self.pool)
      .await
      .map_err(db_error("delete_course"))?;
    Ok(result.rows_affected())
  }
}

#[async_trait]
impl EnrollmentStore for PgStore {
  #[instrument(name = "pg::insert_enrollment_if_absent", skip(self, enrollment), fields(course_id = %enrollment.course_id))]
  async fn insert_enrollment_if_absent(&self, enrollment: NewEnrollment) -> StoreResult<Option<RecordId>> {
    // The unique constraint makes the duplicate check and the insert one atomic step.
    let inserted: Option<(Uuid,)> = sqlx::query_as(
      "INSERT INTO enrollments (user_email, course_id, enrolled_at) VALUES ($1, $2, $3) \
       ON CONFLICT ON CONSTRAINT enrollments_user_course_key DO NOTHING RETURNING id",
    )
    .bind(enrollment.user_email)
    .bind(enrollment.course_id.to_storage_key())
    .bind(enrollment.enrolled_at)
    .fetch_optional(&self.pool)
    .await
    .map_err(db_error("insert_enrollment_if_absent"))?;
    Ok(inserted.map(|(id,)| RecordId::from(id)))
  }

  #[instrument(name = "pg::find_enrollments_by_user", skip(self))]
  async fn find_enrollments_by_user(&self, user_email: &str) -> StoreResult<Vec<Enrollment>> {
    let rows: Vec<EnrollmentRow> = sqlx::query_as(
      "SELECT id, user_email, course_id, enrolled_at FROM enrollments WHERE user_email = $1 ORDER BY enrolled_at",
    )
    .bind(user_email)
    .fetch_all(&self.pool)
    .await
    .map_err(db_error("find_enrollments_by_user"))?;
    Ok(rows.into_iter().map(Enrollment::from).collect())
  }
}

#[async_trait]
impl Store for PgStore {
  async fn ping(&self) -> StoreResult<()> {
    sqlx::query("SELECT 1")
      .execute(&self.pool)
      .await
      .map_err(db_error("ping"))?;
    Ok(())
  }
}
