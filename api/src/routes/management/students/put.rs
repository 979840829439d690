use crate::routes::management::common::{StudentResponse, map_service_error};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    response::Response,
};
use services::management::{ManagementService, StudentInput};
use util::state::AppState;

/// PUT /api/management/students/{student_id}
///
/// Update a student. The path id identifies the record; an id in the body is
/// not authoritative and is ignored by the service.
///
/// ### Responses
/// - `200 OK` — the updated student object
/// - `400 Bad Request` — validation failure
/// - `404 Not Found` — no student with this id
pub async fn update_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
    Json(req): Json<StudentInput>,
) -> Response {
    tracing::info!(student_id, "Updating student");

    match ManagementService::update_student(app_state.db(), student_id, req).await {
        Ok(student) => (StatusCode::OK, Json(StudentResponse::from(student))).into_response(),
        Err(e) => map_service_error(e),
    }
}
