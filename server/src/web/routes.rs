// coursehub_server/src/web/routes.rs

use actix_web::{error, web, HttpRequest, Resource};

use crate::errors::AppError;
use crate::web::handlers::{course_handlers, enrollment_handlers, health_handlers};

/// Fallback for any method/path combination no route handles.
pub async fn route_not_found() -> Result<actix_web::HttpResponse, AppError> {
  Err(AppError::RouteNotFound)
}

// A known path with an unsupported method answers like an unknown path.
fn resource(path: &str) -> Resource {
  web::resource(path).default_service(web::to(route_not_found))
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::BadRequest {
    message: "Invalid JSON body".to_string(),
    detail: err.to_string(),
  }
  .into()
}

fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::BadRequest {
    message: "Invalid query string".to_string(),
    detail: err.to_string(),
  }
  .into()
}

// This function will be called in `main.rs` (and by the API tests) to configure
// services for the Actix App. The unmatched-route fallback is installed on the
// App itself with `default_service(web::to(route_not_found))`.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .app_data(web::QueryConfig::default().error_handler(query_error_handler))
    .service(resource("/").route(web::get().to(health_handlers::root_handler)))
    .service(resource("/health").route(web::get().to(health_handlers::health_check_handler)))
    .service(
      resource("/courses")
        .route(web::get().to(course_handlers::list_courses_handler))
        .route(web::post().to(course_handlers::create_course_handler)),
    )
    .service(
      resource("/courses/{id}")
        .route(web::get().to(course_handlers::get_course_handler))
        .route(web::put().to(course_handlers::update_course_handler))
        .route(web::delete().to(course_handlers::delete_course_handler)),
    )
    .service(
      resource("/enrollments")
        .route(web::get().to(enrollment_handlers::list_enrollments_handler))
        .route(web::post().to(enrollment_handlers::create_enrollment_handler)),
    );
}
