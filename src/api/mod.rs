mod handlers;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use history_core::store::SnapshotHandle;

pub use handlers::HealthResponse;

/// Canonical path of the release history page.
pub const RELEASE_HISTORY_PATH: &str = "/doc/devel/release";

pub fn create_router(snapshots: SnapshotHandle) -> Router {
    Router::new()
        // Release history
        .route(RELEASE_HISTORY_PATH, get(handlers::release_history))
        .route("/doc/devel/release.html", get(handlers::legacy_release_history))
        // Health
        .route("/health", get(handlers::health))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(snapshots)
}
