use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Json,
};
use serde::{Deserialize, Serialize};

use history_core::render::{render_fragment, render_page, PAGE_TITLE};
use history_core::store::SnapshotHandle;

use super::RELEASE_HISTORY_PATH;

// ============================================================
// Error Handling
// ============================================================

/// Log a missing snapshot and return a generic response to the client.
///
/// The server refuses to start without valid content, so reaching this
/// means the handler was wired to a handle that was never published.
fn content_unavailable() -> (StatusCode, String) {
    tracing::error!("Release history requested but no content snapshot is loaded");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Release history is unavailable".to_string(),
    )
}

// ============================================================
// Health
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Number of major releases in the current snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub releases: Option<usize>,
}

pub async fn health(State(snapshots): State<SnapshotHandle>) -> impl IntoResponse {
    match snapshots.current() {
        Some(store) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                releases: Some(store.len()),
            }),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unavailable".to_string(),
                releases: None,
            }),
        ),
    }
}

// ============================================================
// Release History
// ============================================================

pub async fn release_history(
    State(snapshots): State<SnapshotHandle>,
) -> Result<Html<String>, (StatusCode, String)> {
    let store = snapshots.current().ok_or_else(content_unavailable)?;

    let fragment = render_fragment(&store);
    tracing::debug!(
        releases = store.len(),
        bytes = fragment.len(),
        "Rendered release history"
    );

    Ok(Html(render_page(PAGE_TITLE, &fragment)))
}

/// Old links used the `.html` file name.
pub async fn legacy_release_history() -> Redirect {
    Redirect::permanent(RELEASE_HISTORY_PATH)
}
