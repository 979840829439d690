//! # Teacher Creation Routes
//!
//! - `POST /api/management/teachers`: plain create; service failures are
//!   propagated to the error translator (409 on duplicate, etc.)
//! - `POST /api/management/registerTeacher`: registration flow; **any**
//!   service failure is caught locally and returned as `400` with the
//!   failure message as a plain-text body.
//!
//! The asymmetry is deliberate: registration is the path exposed to
//! less-trusted first-time submissions and is hardened accordingly.

use crate::routes::management::common::{TeacherResponse, map_service_error};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse, response::Response};
use services::management::{ManagementService, TeacherInput};
use util::state::AppState;

/// POST /api/management/teachers
///
/// Creates a teacher.
///
/// ### Request Body
/// ```json
/// { "username": "ada", "email": "ada@school.test", "subject": "Mathematics" }
/// ```
///
/// ### Responses
/// - `201 Created` — the created teacher object
/// - `400 Bad Request` — validation failure (empty username)
/// - `409 Conflict` — a teacher with this username already exists
pub async fn add_teacher(
    State(app_state): State<AppState>,
    Json(req): Json<TeacherInput>,
) -> Response {
    tracing::info!(username = %req.username, "Adding teacher");

    match ManagementService::add_teacher(app_state.db(), req).await {
        Ok(teacher) => (
            StatusCode::CREATED,
            Json(TeacherResponse::from(teacher)),
        )
            .into_response(),
        Err(e) => map_service_error(e),
    }
}

/// POST /api/management/registerTeacher
///
/// Registers a teacher. Unlike the plain create route, every service
/// failure is converted into a client error here.
///
/// ### Responses
/// - `201 Created` — plain text `Teacher registered successfully.`
/// - `400 Bad Request` — plain text failure message, e.g. `Teacher already exists`
pub async fn register_teacher(
    State(app_state): State<AppState>,
    Json(req): Json<TeacherInput>,
) -> Response {
    tracing::info!(username = %req.username, "Registering teacher");

    match ManagementService::add_teacher(app_state.db(), req).await {
        Ok(_) => (StatusCode::CREATED, "Teacher registered successfully.").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Error registering teacher");
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}
