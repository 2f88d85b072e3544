//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{Extensions, HeaderMap},
    response::Redirect,
};
use std::net::SocketAddr;

use crate::state::AppState;
use crate::utils::client_info::{extract_client_ip, extract_user_agent};

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the code in the registry
/// 2. On a hit, record a click with the visitor's IP and user agent
/// 3. Return 307 Temporary Redirect to the original URL
///
/// Unknown codes are not an error: the visitor is sent to `/` instead.
///
/// # Client IP
///
/// Taken from `X-Forwarded-For` / `X-Real-IP`, falling back to the peer
/// address when the server runs with connect info.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    extensions: Extensions,
) -> Redirect {
    let peer = extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());

    let target = state
        .link_service
        .resolve_redirect(
            &code,
            extract_client_ip(&headers, peer),
            extract_user_agent(&headers),
        )
        .await;

    match target {
        Some(original_url) => Redirect::temporary(&original_url),
        None => Redirect::temporary("/"),
    }
}
