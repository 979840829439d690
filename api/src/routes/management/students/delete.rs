use crate::routes::management::common::map_service_error;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    response::Response,
};
use services::management::ManagementService;
use util::state::AppState;

/// DELETE /api/management/students/{student_id}
///
/// Delete a student by id.
///
/// ### Responses
/// - `204 No Content` — deleted, empty body
/// - `404 Not Found` — no student with this id
pub async fn delete_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Response {
    tracing::info!(student_id, "Deleting student");

    match ManagementService::delete_student(app_state.db(), student_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => map_service_error(e),
    }
}
