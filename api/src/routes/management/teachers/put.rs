use crate::routes::management::common::{TeacherResponse, map_service_error};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    response::Response,
};
use services::management::{ManagementService, TeacherInput};
use util::state::AppState;

/// PUT /api/management/teachers/{teacher_id}
///
/// Update a teacher. The path id identifies the record; an id in the body is
/// not authoritative and is ignored by the service.
///
/// ### Responses
/// - `200 OK` — the updated teacher object
/// - `400 Bad Request` — validation failure
/// - `404 Not Found` — no teacher with this id
/// - `409 Conflict` — username taken by another teacher
pub async fn update_teacher(
    State(app_state): State<AppState>,
    Path(teacher_id): Path<i64>,
    Json(req): Json<TeacherInput>,
) -> Response {
    tracing::info!(teacher_id, "Updating teacher");

    match ManagementService::update_teacher(app_state.db(), teacher_id, req).await {
        Ok(teacher) => (StatusCode::OK, Json(TeacherResponse::from(teacher))).into_response(),
        Err(e) => map_service_error(e),
    }
}
