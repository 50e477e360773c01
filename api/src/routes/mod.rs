//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint (public)
//! - `/modules` → Module-scoped resources such as custom gradebook column data (authenticated users)

use crate::auth::guards::allow_authenticated;
use crate::routes::{health::health_routes, modules::modules_routes};
use axum::{Router, middleware::from_fn};
use util::state::AppState;

pub mod health;
pub mod modules;

/// Builds the application router for all HTTP endpoints under `/api`.
///
/// State is attached here, so callers can nest the result directly.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest(
            "/modules",
            modules_routes().route_layer(from_fn(allow_authenticated)),
        )
        .with_state(app_state)
}
