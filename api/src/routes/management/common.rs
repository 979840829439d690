use crate::response::ApiResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use services::error::ServiceError;

#[derive(Debug, Serialize, Deserialize)]
pub struct TeacherResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub subject: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<db::models::teacher::Model> for TeacherResponse {
    fn from(teacher: db::models::teacher::Model) -> Self {
        Self {
            id: teacher.id,
            username: teacher.username,
            email: teacher.email,
            subject: teacher.subject,
            created_at: teacher.created_at.to_rfc3339(),
            updated_at: teacher.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub grade: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<db::models::student::Model> for StudentResponse {
    fn from(student: db::models::student::Model) -> Self {
        Self {
            id: student.id,
            name: student.name,
            email: student.email,
            grade: student.grade,
            created_at: student.created_at.to_rfc3339(),
            updated_at: student.updated_at.to_rfc3339(),
        }
    }
}

/// Translates a `ServiceError` into an HTTP response.
///
/// Every management route except `/registerTeacher` propagates service
/// failures through this mapping; the register path handles its own errors
/// locally and must not use it.
pub fn map_service_error(e: ServiceError) -> Response {
    let status = match &e {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::Conflict(_) => StatusCode::CONFLICT,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(ApiResponse::<()>::error(e.to_string()))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    fn status_of(e: ServiceError) -> StatusCode {
        map_service_error(e).status()
    }

    #[test]
    fn service_errors_map_to_expected_statuses() {
        assert_eq!(
            status_of(ServiceError::Validation("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ServiceError::Conflict("dup".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(ServiceError::NotFound("gone".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ServiceError::Database(DbErr::Custom("boom".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
