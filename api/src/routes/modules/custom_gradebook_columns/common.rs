use axum::{Json, extract::rejection::JsonRejection, http::StatusCode};
use serde::Deserialize;
use services::ServiceError;

use crate::response::{ApiResponse, Empty};

/// Body of `PUT|PATCH .../data/{user_id}`.
///
/// A missing `column_data` object or `content` key leaves the stored value unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct ColumnDatumRequest {
    #[serde(default)]
    pub column_data: Option<ColumnDatumFields>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ColumnDatumFields {
    #[serde(default)]
    pub content: Option<String>,
}

impl ColumnDatumRequest {
    pub fn into_content(self) -> Option<String> {
        self.column_data.and_then(|fields| fields.content)
    }
}

/// Maps a service failure onto its status code and error envelope.
pub fn service_error_response(err: ServiceError) -> (StatusCode, Json<ApiResponse<Empty>>) {
    match err {
        ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ApiResponse::error(msg))),
        ServiceError::Forbidden(msg) => (StatusCode::FORBIDDEN, Json(ApiResponse::error(msg))),
        ServiceError::Database(e) => {
            tracing::error!(error = %e, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Database error")),
            )
        }
    }
}

/// Renders a rejected JSON body in the standard error envelope.
pub fn json_rejection_response(rejection: JsonRejection) -> (StatusCode, Json<ApiResponse<Empty>>) {
    (rejection.status(), Json(ApiResponse::error(rejection.body_text())))
}
