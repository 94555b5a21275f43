// tests/enrollment_service_tests.rs
mod common;

use common::*;
use coursehub::courses::{COURSE_NOT_FOUND, INVALID_COURSE_ID};
use coursehub::enrollments::{ALREADY_ENROLLED, ENROLLMENT_FIELDS_REQUIRED, USER_EMAIL_REQUIRED};
use coursehub::{CatalogError, EnrollmentRequest, RecordId};

fn request(user_email: &str, course_id: impl ToString) -> EnrollmentRequest {
  EnrollmentRequest {
    user_email: Some(user_email.to_string()),
    course_id: Some(course_id.to_string()),
  }
}

#[tokio::test]
async fn test_enroll_requires_both_fields() {
  setup_tracing();
  let fx = fixture();
  let course = seed_course(&fx, "Intro", "Dev").await;

  let cases = [
    EnrollmentRequest { user_email: None, ..request("a@example.com", course) },
    EnrollmentRequest { course_id: None, ..request("a@example.com", course) },
    request("", course),
    EnrollmentRequest::default(),
  ];
  for case in cases {
    match fx.enrollments.enroll(case).await {
      Err(CatalogError::Validation(m)) => assert_eq!(m, ENROLLMENT_FIELDS_REQUIRED),
      other => panic!("Expected validation error, got {:?}", other),
    }
  }
  assert_eq!(fx.store.enrollment_count(), 0);
}

#[tokio::test]
async fn test_enroll_validates_course_id_format_then_existence() {
  setup_tracing();
  let fx = fixture();

  match fx.enrollments.enroll(request("a@example.com", "not-an-id")).await {
    Err(CatalogError::InvalidId(m)) => assert_eq!(m, INVALID_COURSE_ID),
    other => panic!("Expected InvalidId, got {:?}", other),
  }
  match fx.enrollments.enroll(request("a@example.com", RecordId::generate())).await {
    Err(CatalogError::NotFound(m)) => assert_eq!(m, COURSE_NOT_FOUND),
    other => panic!("Expected NotFound, got {:?}", other),
  }
}

#[tokio::test]
async fn test_enroll_twice_is_conflict() {
  setup_tracing();
  let fx = fixture();
  let course = seed_course(&fx, "Intro", "Dev").await;

  fx.enrollments.enroll(request("a@example.com", course)).await.unwrap();
  match fx.enrollments.enroll(request("a@example.com", course)).await {
    Err(CatalogError::Conflict(m)) => assert_eq!(m, ALREADY_ENROLLED),
    other => panic!("Expected Conflict, got {:?}", other),
  }
  // A different user may still enroll in the same course.
  fx.enrollments.enroll(request("b@example.com", course)).await.unwrap();
  assert_eq!(fx.store.enrollment_count(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_enrolls_admit_exactly_one() {
  setup_tracing();
  let fx = fixture();
  let course = seed_course(&fx, "Intro", "Dev").await;

  let attempts = (0..8).map(|_| {
    let service = fx.enrollments.clone();
    tokio::spawn(async move { service.enroll(request("race@example.com", course)).await })
  });
  let results = futures_util::future::join_all(attempts).await;

  let successes = results.iter().filter(|r| matches!(r, Ok(Ok(_)))).count();
  let conflicts = results
    .iter()
    .filter(|r| matches!(r, Ok(Err(CatalogError::Conflict(_)))))
    .count();
  assert_eq!(successes, 1);
  assert_eq!(conflicts, 7);
  assert_eq!(fx.store.enrollment_count(), 1);
}

#[tokio::test]
async fn test_list_by_user_requires_email() {
  setup_tracing();
  let fx = fixture();
  for email in [None, Some(""), Some("   ")] {
    match fx.enrollments.list_by_user(email).await {
      Err(CatalogError::Validation(m)) => assert_eq!(m, USER_EMAIL_REQUIRED),
      other => panic!("Expected validation error, got {:?}", other),
    }
  }
}

#[tokio::test]
async fn test_list_by_user_joins_courses_for_exact_email_only() {
  setup_tracing();
  let fx = fixture();
  let intro = seed_course(&fx, "Intro", "Dev").await;
  let art = seed_course(&fx, "Watercolour", "Art").await;

  let first = fx.enrollments.enroll(request("a@example.com", intro)).await.unwrap();
  let second = fx.enrollments.enroll(request("a@example.com", art)).await.unwrap();
  fx.enrollments.enroll(request("b@example.com", intro)).await.unwrap();
  fx.enrollments.enroll(request("A@example.com", art)).await.unwrap();

  let listing = fx.enrollments.list_by_user(Some("a@example.com")).await.unwrap();
  assert_eq!(listing.count, 2);

  let ids: Vec<RecordId> = listing.items.iter().map(|v| v.enrollment_id).collect();
  assert_eq!(ids, vec![first, second]);
  for view in &listing.items {
    assert_eq!(view.user_email, "a@example.com");
  }
  assert_eq!(listing.items[0].course.id, intro);
  assert_eq!(listing.items[0].course.title, "Intro");
  assert_eq!(listing.items[1].course.id, art);
  assert!(listing.items[0].enrolled_at <= listing.items[1].enrolled_at);
}

#[tokio::test]
async fn test_list_by_user_drops_enrollments_for_deleted_courses() {
  setup_tracing();
  let fx = fixture();
  let kept = seed_course(&fx, "Intro", "Dev").await;
  let removed = seed_course(&fx, "Retired", "Dev").await;

  fx.enrollments.enroll(request("a@example.com", kept)).await.unwrap();
  fx.enrollments.enroll(request("a@example.com", removed)).await.unwrap();
  fx.courses.delete(&removed.to_string()).await.unwrap();

  let listing = fx.enrollments.list_by_user(Some("a@example.com")).await.unwrap();
  assert_eq!(listing.count, 1);
  assert_eq!(listing.items[0].course.id, kept);
  // The orphaned enrollment itself is still stored.
  assert_eq!(fx.store.enrollment_count(), 2);
}

#[tokio::test]
async fn test_list_by_user_with_no_enrollments_is_empty() {
  setup_tracing();
  let fx = fixture();
  let listing = fx.enrollments.list_by_user(Some("nobody@example.com")).await.unwrap();
  assert_eq!(listing.count, 0);
  assert!(listing.items.is_empty());
}
