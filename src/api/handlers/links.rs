//! Handlers for single-link lookup and deletion.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::{DeleteLinkResponse, LinkDetailResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns a link with its full click history.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkDetailResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(LinkDetailResponse {
        success: true,
        link: link.into(),
    }))
}

/// Deletes a link and frees its short code.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Behavior
///
/// The link is removed outright. Its code, and its alias if it had one,
/// can be claimed again by a later create.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteLinkResponse>, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(Json(DeleteLinkResponse { success: true }))
}
