//! Handlers for the health check and service index.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse, IndexResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// The registry lives in process memory, so it is always reachable; the
/// check reports how many links it currently holds.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "registry": {
///       "status": "ok",
///       "message": "In-memory, 3 links"
///     }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let links = state.link_service.count_links().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            registry: CheckStatus {
                status: "ok".to_string(),
                message: Some(format!("In-memory, {links} links")),
            },
        },
    })
}

/// Landing endpoint; unknown short codes redirect here.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
