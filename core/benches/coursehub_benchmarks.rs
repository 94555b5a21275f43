use coursehub::{CourseRepository, EnrollmentRequest, EnrollmentService, MemoryStore, NewCourse, Store};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;
use tokio::runtime::Runtime; // To run async code within Criterion

const USER: &str = "bench@example.com";

// --- Helper: store with `courses` courses, the bench user enrolled in each ---
fn seeded_services(rt: &Runtime, courses: usize) -> EnrollmentService {
  let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
  let repository = CourseRepository::new(store.clone());
  let service = EnrollmentService::new(store);

  rt.block_on(async {
    for i in 0..courses {
      let id = repository
        .create(NewCourse {
          title: Some(format!("Course {i}")),
          price: Some(10.0),
          category: Some("Bench".to_string()),
          ..Default::default()
        })
        .await
        .unwrap();
      service
        .enroll(EnrollmentRequest {
          user_email: Some(USER.to_string()),
          course_id: Some(id.to_string()),
        })
        .await
        .unwrap();
    }
  });
  service
}

// --- Benchmark Functions ---

fn bench_list_by_user_join(c: &mut Criterion) {
  let rt = Runtime::new().unwrap();
  let mut group = c.benchmark_group("EnrollmentJoin");

  for enrollments in [1usize, 10, 100].iter() {
    let service = seeded_services(&rt, *enrollments);
    group.throughput(Throughput::Elements(*enrollments as u64));
    group.bench_with_input(
      BenchmarkId::new("list_by_user", enrollments),
      enrollments,
      |b, _| {
        b.to_async(&rt).iter(|| async {
          let listing = service.list_by_user(Some(USER)).await.unwrap();
          criterion::black_box(listing.count)
        })
      },
    );
  }
  group.finish();
}

fn bench_course_list_filter(c: &mut Criterion) {
  let rt = Runtime::new().unwrap();
  let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
  let repository = CourseRepository::new(store);
  rt.block_on(async {
    for i in 0..500 {
      let category = if i % 5 == 0 { "Dev" } else { "Other" };
      repository
        .create(NewCourse {
          title: Some(format!("Course {i}")),
          price: Some(1.0),
          category: Some(category.to_string()),
          ..Default::default()
        })
        .await
        .unwrap();
    }
  });

  c.bench_function("CourseList/category_filter_500", |b| {
    b.to_async(&rt).iter(|| async {
      let listing = repository.list(Some("Dev")).await.unwrap();
      criterion::black_box(listing.count)
    })
  });
}

criterion_group!(benches, bench_list_by_user_join, bench_course_list_filter);
criterion_main!(benches);
