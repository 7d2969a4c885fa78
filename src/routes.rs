//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health` - Health check (database)
//! - `/api/*`      - Folder and note REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configurable allowed origins
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routed application with its middleware, without path
/// normalization.
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(cors::layer(allowed_origins))
        .layer(tracing::layer())
}

/// Constructs the application router served by the binary.
///
/// Trailing slashes are trimmed before routing, so `/api/folder/` reaches the
/// same handler as `/api/folder`.
pub fn app_router(state: AppState, allowed_origins: &[String]) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, allowed_origins))
}
