use crate::routes::management::common::{StudentResponse, map_service_error};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse, response::Response};
use services::management::ManagementService;
use util::state::AppState;

/// GET /api/management/students
///
/// Retrieve all students, ordered by id ascending.
///
/// ### Responses
/// - `200 OK` — JSON array of student objects
pub async fn get_all_students(State(app_state): State<AppState>) -> Response {
    tracing::info!("Fetching all students");

    match ManagementService::get_all_students(app_state.db()).await {
        Ok(students) => {
            let body: Vec<StudentResponse> =
                students.into_iter().map(StudentResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => map_service_error(e),
    }
}
