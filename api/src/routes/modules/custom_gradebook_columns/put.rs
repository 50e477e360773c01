use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::column_datum_service::{ColumnDatumService, UpdateColumnDatum, UpdateOutcome};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::routes::modules::custom_gradebook_columns::common::{
    ColumnDatumRequest, json_rejection_response, service_error_response,
};

/// PUT|PATCH /api/modules/{module_id}/custom_gradebook_columns/{column_id}/data/{user_id}
///
/// Sets one student's value in a column. Blank content removes the value.
///
/// # AuthZ / AuthN
/// - Requires a valid `Bearer` token (JWT).
/// - The student must be visible to the caller, and the caller must be able to manage the column.
///
/// # Request Body
/// ```json
/// { "column_data": { "content": "Nut allergy" } }
/// ```
///
/// # Responses
/// - `200 OK`: The saved (or removed) value:
///
/// ```json
/// { "content": "Nut allergy", "user_id": 2 }
/// ```
/// - `200 OK`: Field errors when the value was rejected:
///
/// ```json
/// { "content": ["is too long (maximum is 255 characters)"] }
/// ```
/// - `401 UNAUTHORIZED`: Missing/invalid token.
/// - `403 FORBIDDEN`: Caller may not update this column.
/// - `404 NOT FOUND`: Module, student or active column not found.
/// - `400`/`415`/`422`: Body is not valid JSON for this shape (error envelope).
pub async fn update_column_datum(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((module_id, column_id, user_id)): Path<(i64, i64, i64)>,
    payload: Result<Json<ColumnDatumRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return json_rejection_response(rejection).into_response(),
    };

    let params = UpdateColumnDatum {
        module_id,
        column_id,
        user_id,
        content: req.into_content(),
    };

    match ColumnDatumService::update(app_state.db(), user.actor(), params).await {
        Ok(UpdateOutcome::Saved(datum)) | Ok(UpdateOutcome::Deleted(datum)) => {
            (StatusCode::OK, Json(datum)).into_response()
        }
        Ok(UpdateOutcome::Invalid(errors)) => (StatusCode::OK, Json(errors)).into_response(),
        Err(err) => service_error_response(err).into_response(),
    }
}
