// coursehub_server/src/seed.rs

//! Demo catalogue inserted at startup when `SEED_DB=true` and no courses exist.

use coursehub::{CatalogResult, CourseRepository, NewCourse};
use tracing::{info, instrument};

fn demo_courses() -> Vec<NewCourse> {
  let course = |title: &str, category: &str, price: f64, duration: &str, featured: bool, instructor: &str| NewCourse {
    title: Some(title.to_string()),
    image: Some(format!(
      "https://images.example.com/courses/{}.jpg",
      title.to_lowercase().replace(' ', "-")
    )),
    price: Some(price),
    duration: Some(duration.to_string()),
    category: Some(category.to_string()),
    description: Some(format!("{}: a hands-on {} course.", title, category.to_lowercase())),
    is_featured: Some(featured),
    instructor_name: Some(instructor.to_string()),
    instructor_email: Some(format!(
      "{}@example.com",
      instructor.split_whitespace().next().unwrap_or("instructor").to_lowercase()
    )),
    instructor_photo: Some("https://images.example.com/instructors/default.png".to_string()),
  };

  vec![
    course("Complete Web Development", "Development", 49.99, "40 hours", true, "Alex Morgan"),
    course("UI Design Fundamentals", "Design", 29.0, "12 hours", false, "Priya Natarajan"),
    course("Digital Marketing Basics", "Marketing", 19.5, "8 hours", false, "Jordan Lee"),
  ]
}

/// Inserts the demo catalogue unless courses already exist. Returns how many were inserted.
#[instrument(name = "seed::demo_courses", skip(courses), err(Display))]
pub async fn seed_demo_courses(courses: &CourseRepository) -> CatalogResult<usize> {
  let existing = courses.list(None).await?;
  if existing.count > 0 {
    info!(existing = existing.count, "Catalogue already populated; skipping seed.");
    return Ok(0);
  }

  let mut inserted = 0;
  for course in demo_courses() {
    courses.create(course).await?;
    inserted += 1;
  }
  info!(inserted, "Seeded demo courses.");
  Ok(inserted)
}

#[cfg(test)]
mod tests {
  use super::*;
  use coursehub::{MemoryStore, Store};
  use std::sync::Arc;

  #[tokio::test]
  async fn seeds_once_into_an_empty_catalogue() {
    let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
    let courses = CourseRepository::new(store);

    let first = seed_demo_courses(&courses).await.unwrap();
    assert_eq!(first, demo_courses().len());

    let second = seed_demo_courses(&courses).await.unwrap();
    assert_eq!(second, 0);

    let listing = courses.list(Some("Design")).await.unwrap();
    assert_eq!(listing.count, 1);
    assert_eq!(listing.items[0].instructor_email.as_deref(), Some("priya@example.com"));
  }
}
