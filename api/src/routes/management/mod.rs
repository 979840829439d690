//! # Management Routes Module
//!
//! Wires up the `/api/management` endpoint group: teacher and student CRUD
//! plus the public-facing teacher registration path.
//!
//! ## Structure
//! - `teachers/` — handlers for `/teachers` and `/registerTeacher`
//! - `students/` — handlers for `/students`
//! - `common.rs` — response shapes and the service error translator
//!
//! ## Middleware
//! The whole group is protected by the `allow_management` guard (applied in
//! `routes::routes`), so no handler here re-checks authorization.

use axum::{Router, routing::post};
use teachers::post::register_teacher;
use util::state::AppState;

pub mod common;
pub mod students;
pub mod teachers;

/// Builds the `/management` route group.
///
/// - `GET    /teachers`        → list teachers
/// - `POST   /teachers`        → create teacher
/// - `PUT    /teachers/{id}`   → update teacher
/// - `DELETE /teachers/{id}`   → delete teacher
/// - `POST   /registerTeacher` → register teacher (plain-text responses)
/// - `GET    /students`        → list students
/// - `POST   /students`        → create student
/// - `PUT    /students/{id}`   → update student
/// - `DELETE /students/{id}`   → delete student
pub fn management_routes() -> Router<AppState> {
    Router::new()
        .nest("/teachers", teachers::teacher_routes())
        .nest("/students", students::student_routes())
        .route("/registerTeacher", post(register_teacher))
}
