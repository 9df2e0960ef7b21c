//! Static front-end serving.
//!
//! Any path outside `/api` is looked up in the static directory; paths with
//! no matching file get `index.html` so the client-side router can take
//! over.

use std::path::Path;

use axum::extract::OriginalUri;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tower_http::services::{ServeDir, ServeFile};

/// File service for the built front end with an `index.html` fallback.
pub fn spa_service(static_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")))
}

/// Fallback for `/api/...` paths that match no route.
pub async fn api_not_found(OriginalUri(uri): OriginalUri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": format!("No API route for {}", uri.path()),
            "code": "NOT_FOUND",
        })),
    )
        .into_response()
}
