//! Service-level endpoints that do not touch the store.

use axum::{response::IntoResponse, Json};

/// Liveness probe.
///
/// GET /health
#[utoipa::path(get, path = "/health", tag = "System",
    responses((status = 200, description = "Service is running")))]
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
