//! DTOs for the link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// Alias rules live in [`crate::utils::code_generator::validate_alias`] and
/// are applied by the link service.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten. Missing, `null` and `""` all mean no URL.
    #[serde(default)]
    #[validate(required(message = "URL is required"), url(message = "Invalid URL format"))]
    pub url: Option<String>,

    /// Optional custom short code.
    pub alias: Option<String>,
}

/// Response for a newly created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub success: bool,
    pub short_url: String,
    pub short_code: String,
    pub original_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub created_at: DateTime<Utc>,
    pub base_url: String,
}
