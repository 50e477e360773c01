use serde::Serialize;

/// Standard JSON envelope for errors and status endpoints.
///
/// ```json
/// { "success": false, "data": {}, "message": "Column not found" }
/// ```
///
/// The column data endpoints return their documented payloads bare on
/// success and only use this envelope for failures.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

/// Serializes as `{}`; the `data` of an error envelope.
#[derive(Serialize, Default, Debug, Clone, Copy)]
pub struct Empty {}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Error response with a default (empty) `data` payload.
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
