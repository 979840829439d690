use serde::Serialize;

/// Standardized JSON envelope for error responses (and enveloped successes
/// such as the health check):
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "Teacher with ID 7 not found"
/// }
/// ```
///
/// Entity endpoints return the record JSON directly on success; this wrapper
/// is the output format of the error translator.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Constructs an error response with a message and default `data`.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}
