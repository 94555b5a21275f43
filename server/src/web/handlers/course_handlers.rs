// coursehub_server/src/web/handlers/course_handlers.rs

use actix_web::{web, HttpResponse};
use coursehub::{CoursePatch, NewCourse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ListCoursesQuery {
  pub category: Option<String>,
}

#[instrument(name = "handler::create_course", skip(app_state, payload))]
pub async fn create_course_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<NewCourse>,
) -> Result<HttpResponse, AppError> {
  let course_id = app_state.courses.create(payload.into_inner()).await?;

  Ok(HttpResponse::Created().json(json!({
      "success": true,
      "message": "Course created successfully",
      "courseId": course_id
  })))
}

#[instrument(name = "handler::list_courses", skip(app_state))]
pub async fn list_courses_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListCoursesQuery>,
) -> Result<HttpResponse, AppError> {
  let listing = app_state.courses.list(query_params.category.as_deref()).await?;
  info!("Successfully fetched {} courses.", listing.count);

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "count": listing.count,
      "data": listing.items
  })))
}

#[instrument(name = "handler::get_course", skip(app_state, path), fields(course_id = %path.as_str()))]
pub async fn get_course_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let course = app_state.courses.get(&path).await?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "data": course
  })))
}

#[instrument(name = "handler::update_course", skip(app_state, path, payload), fields(course_id = %path.as_str()))]
pub async fn update_course_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<CoursePatch>,
) -> Result<HttpResponse, AppError> {
  let modified_count = app_state.courses.update(&path, payload.into_inner()).await?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": "Course updated successfully",
      "modifiedCount": modified_count
  })))
}

#[instrument(name = "handler::delete_course", skip(app_state, path), fields(course_id = %path.as_str()))]
pub async fn delete_course_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  app_state.courses.delete(&path).await?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": "Course deleted successfully"
  })))
}
