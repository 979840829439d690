use crate::routes::management::common::{StudentResponse, map_service_error};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse, response::Response};
use services::management::{ManagementService, StudentInput};
use util::state::AppState;

/// POST /api/management/students
///
/// Creates a student.
///
/// ### Request Body
/// ```json
/// { "name": "sam", "email": "sam@school.test", "grade": 7 }
/// ```
///
/// ### Responses
/// - `201 Created` — the created student object
/// - `400 Bad Request` — validation failure (empty name)
pub async fn add_student(
    State(app_state): State<AppState>,
    Json(req): Json<StudentInput>,
) -> Response {
    tracing::info!(name = %req.name, "Adding student");

    match ManagementService::add_student(app_state.db(), req).await {
        Ok(student) => (
            StatusCode::CREATED,
            Json(StudentResponse::from(student)),
        )
            .into_response(),
        Err(e) => map_service_error(e),
    }
}
