// coursehub_server/src/web/handlers/mod.rs

// Declare handler modules
pub mod course_handlers;
pub mod enrollment_handlers;
pub mod health_handlers;
