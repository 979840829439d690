use crate::routes::management::common::map_service_error;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    response::Response,
};
use services::management::ManagementService;
use util::state::AppState;

/// DELETE /api/management/teachers/{teacher_id}
///
/// Delete a teacher by id.
///
/// ### Responses
/// - `204 No Content` — deleted, empty body
/// - `404 Not Found` — no teacher with this id (a repeat delete lands here)
pub async fn delete_teacher(
    State(app_state): State<AppState>,
    Path(teacher_id): Path<i64>,
) -> Response {
    tracing::info!(teacher_id, "Deleting teacher");

    match ManagementService::delete_teacher(app_state.db(), teacher_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => map_service_error(e),
    }
}
