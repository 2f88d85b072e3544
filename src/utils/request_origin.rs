//! Request origin extraction for building absolute short URLs.

use crate::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;

/// Header set by reverse proxies carrying the original request scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds the `scheme://host[:port]` origin the client used.
///
/// The scheme comes from `X-Forwarded-Proto` (first entry) and defaults to
/// `http`. The host, including any port, comes from the `Host` header.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The `Host` header is missing or empty
/// - The header value contains invalid UTF-8
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:3000".parse().unwrap());
///
/// assert_eq!(extract_origin(&headers).unwrap(), "http://localhost:3000");
/// ```
pub fn extract_origin(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
        .trim();

    if host.is_empty() {
        return Err(AppError::bad_request("Missing Host header", json!({})));
    }

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| v.eq_ignore_ascii_case("http") || v.eq_ignore_ascii_case("https"))
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| "http".to_string());

    Ok(format!("{scheme}://{host}"))
}
