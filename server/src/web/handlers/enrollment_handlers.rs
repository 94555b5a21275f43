// coursehub_server/src/web/handlers/enrollment_handlers.rs

use actix_web::{web, HttpResponse};
use coursehub::EnrollmentRequest;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ListEnrollmentsQuery {
  #[serde(rename = "userEmail")]
  pub user_email: Option<String>,
}

#[instrument(
    name = "handler::create_enrollment",
    skip(app_state, payload),
    fields(course_id = ?payload.course_id)
)]
pub async fn create_enrollment_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<EnrollmentRequest>,
) -> Result<HttpResponse, AppError> {
  let enrollment_id = app_state.enrollments.enroll(payload.into_inner()).await?;

  Ok(HttpResponse::Created().json(json!({
      "success": true,
      "message": "Enrolled successfully",
      "enrollmentId": enrollment_id
  })))
}

#[instrument(name = "handler::list_enrollments", skip(app_state))]
pub async fn list_enrollments_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListEnrollmentsQuery>,
) -> Result<HttpResponse, AppError> {
  let listing = app_state
    .enrollments
    .list_by_user(query_params.user_email.as_deref())
    .await?;
  info!("Returning {} joined enrollments.", listing.count);

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "count": listing.count,
      "data": listing.items
  })))
}
