//! # Modules Routes Module
//!
//! Wires up routes nested under `/api/modules/{module_id}`. Module existence
//! is checked by each handler's service call, not by a route guard.

use axum::Router;
use util::state::AppState;

use crate::routes::modules::custom_gradebook_columns::custom_gradebook_column_routes;

pub mod custom_gradebook_columns;

/// Builds and returns the `/modules` route group.
///
/// - Nested column data routes under `/modules/{module_id}/custom_gradebook_columns`
pub fn modules_routes() -> Router<AppState> {
    Router::new().nest(
        "/{module_id}/custom_gradebook_columns",
        custom_gradebook_column_routes(),
    )
}
