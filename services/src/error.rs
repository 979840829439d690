use sea_orm::DbErr;
use thiserror::Error;

/// Failures raised by the service layer.
///
/// Messages are client-facing: the register path echoes them verbatim as a
/// plain-text response body.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The payload failed a validation rule (e.g. an empty required field).
    #[error("{0}")]
    Validation(String),

    /// The write collides with an existing record (uniqueness rules).
    #[error("{0}")]
    Conflict(String),

    /// The targeted record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Any other database failure.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}
