use crate::routes::management::common::{TeacherResponse, map_service_error};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse, response::Response};
use services::management::ManagementService;
use util::state::AppState;

/// GET /api/management/teachers
///
/// Retrieve all teachers, ordered by id ascending.
///
/// ### Responses
/// - `200 OK` — JSON array of teacher objects
/// ```json
/// [
///   {
///     "id": 1,
///     "username": "ada",
///     "email": "ada@school.test",
///     "subject": "Mathematics",
///     "created_at": "2026-08-25T08:00:00+00:00",
///     "updated_at": "2026-08-25T08:00:00+00:00"
///   }
/// ]
/// ```
pub async fn get_all_teachers(State(app_state): State<AppState>) -> Response {
    tracing::info!("Fetching all teachers");

    match ManagementService::get_all_teachers(app_state.db()).await {
        Ok(teachers) => {
            let body: Vec<TeacherResponse> =
                teachers.into_iter().map(TeacherResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => map_service_error(e),
    }
}
