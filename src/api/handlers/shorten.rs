//! Handlers for link creation and listing.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use serde_json::json;
use tracing::info;
use validator::Validate;

use crate::api::dto::link::{LinkListResponse, LinkResponse};
use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::extract_origin;

/// Creates a short link for a URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "alias": "my-link"   // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "shortUrl": "http://localhost:3000/my-link",
///   "shortCode": "my-link",
///   "originalUrl": "https://example.com/some/long/path",
///   "alias": "my-link",
///   "createdAt": "2026-01-01T12:00:00Z",
///   "baseUrl": "http://localhost:3000"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON of the expected
/// shape, or if the URL or alias is invalid.
/// Returns 409 Conflict if the alias is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(mut payload) = payload?;
    payload.url = payload.url.filter(|u| !u.is_empty());
    payload.alias = payload.alias.filter(|a| !a.is_empty());
    payload.validate()?;

    let url = payload
        .url
        .ok_or_else(|| AppError::bad_request("URL is required", json!({})))?;

    let base_url = match &state.base_url {
        Some(base_url) => base_url.clone(),
        None => extract_origin(&headers)?,
    };

    let link = state
        .link_service
        .create_short_link(url, payload.alias)
        .await?;

    let short_url = state
        .link_service
        .get_short_url(&base_url, &link.short_code);

    info!(short_code = %link.short_code, "Short link issued");

    Ok(Json(ShortenResponse {
        success: true,
        short_url,
        short_code: link.short_code,
        original_url: link.original_url,
        alias: link.alias,
        created_at: link.created_at,
        base_url,
    }))
}

/// Lists every link, most recently created first.
///
/// # Endpoint
///
/// `GET /api/shorten`
pub async fn list_links_handler(State(state): State<AppState>) -> Json<LinkListResponse> {
    let links = state
        .link_service
        .list_links()
        .await
        .into_iter()
        .map(LinkResponse::from)
        .collect();

    Json(LinkListResponse { links })
}
