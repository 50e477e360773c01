use axum::{
    Extension, Json,
    extract::{OriginalUri, Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use services::column_datum_service::ColumnDatumService;
use util::{paginate::PageParams, state::AppState};

use crate::auth::AuthUser;
use crate::routes::modules::custom_gradebook_columns::common::service_error_response;

/// GET /api/modules/{module_id}/custom_gradebook_columns/{column_id}/data
///
/// Lists the column's values for the students the caller can see, ordered by
/// `user_id`. Students without a value are not listed.
///
/// # AuthZ / AuthN
/// - Requires a valid `Bearer` token (JWT).
/// - Caller must be an admin or a lecturer, assistant lecturer or tutor on the module.
///
/// # Query Parameters
/// - `page`: 1-based page number (default 1).
/// - `per_page`: page size (default 10, max 50).
///
/// # Responses
/// - `200 OK` with a `Link` header (`current`, `next`, `prev`, `first`, `last`):
///
/// ```json
/// [
///   { "content": "Nut allergy", "user_id": 2 },
///   { "content": "Left-handed", "user_id": 7 }
/// ]
/// ```
/// - `401 UNAUTHORIZED`: Missing/invalid token.
/// - `403 FORBIDDEN`: Caller may not read this column.
/// - `404 NOT FOUND`: Module or active column not found.
pub async fn get_column_data(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((module_id, column_id)): Path<(i64, i64)>,
    Query(params): Query<PageParams>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    let pagination = params.normalize();

    match ColumnDatumService::list(app_state.db(), user.actor(), module_id, column_id, pagination)
        .await
    {
        Ok(page) => (
            StatusCode::OK,
            [(header::LINK, page.page.link_header(uri.path()))],
            Json(page.data),
        )
            .into_response(),
        Err(err) => service_error_response(err).into_response(),
    }
}
