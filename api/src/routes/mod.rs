//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint (public)
//! - `/management` → Teacher and student CRUD (management capability required)

use crate::auth::guards::allow_management;
use crate::routes::{health::health_routes, management::management_routes};
use axum::{Router, middleware::from_fn};
use util::state::AppState;

pub mod health;
pub mod management;

/// Builds the complete application router for all HTTP endpoints.
///
/// The `/management` group is wrapped in the [`allow_management`] guard as a
/// route layer, so every route in the group rejects callers without the
/// management capability before any handler logic runs.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest(
            "/management",
            management_routes().route_layer(from_fn(allow_management)),
        )
        .with_state(app_state)
}
