//! Client metadata extraction for click tracking.

use axum::http::{HeaderMap, header};
use std::net::IpAddr;

const FORWARDED_FOR: &str = "x-forwarded-for";
const REAL_IP: &str = "x-real-ip";

/// Determines the visitor's IP address.
///
/// Priority:
/// 1. First entry of `X-Forwarded-For`
/// 2. `X-Real-IP`
/// 3. The peer socket address, when known
///
/// Returns `None` when none of these is available. Header values are taken
/// as sent; they are not required to parse as IP addresses.
pub fn extract_client_ip(headers: &HeaderMap, peer: Option<IpAddr>) -> Option<String> {
    let forwarded = headers
        .get(FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    let real_ip = || {
        headers
            .get(REAL_IP)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    forwarded
        .or_else(real_ip)
        .map(str::to_string)
        .or_else(|| peer.map(|ip| ip.to_string()))
}

/// Returns the `User-Agent` header, if present and valid UTF-8.
pub fn extract_user_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
