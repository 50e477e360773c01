use axum::{
    Router,
    routing::{get, put},
};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod put;

use get::get_column_data;
use put::update_column_datum;

/// Routes for `/modules/{module_id}/custom_gradebook_columns`.
///
/// - `GET       /{column_id}/data`           → list the column's data
/// - `PUT|PATCH /{column_id}/data/{user_id}` → set or clear one student's value
pub fn custom_gradebook_column_routes() -> Router<AppState> {
    Router::new()
        .route("/{column_id}/data", get(get_column_data))
        .route(
            "/{column_id}/data/{user_id}",
            put(update_column_datum).patch(update_column_datum),
        )
}
