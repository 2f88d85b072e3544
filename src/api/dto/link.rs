//! DTOs for link lookup, listing and deletion.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use crate::domain::entities::Link;

/// Full JSON representation of a link, including its click history.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
    pub click_history: Vec<ClickInfo>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        let click_history = link.click_history().iter().map(ClickInfo::from).collect();

        Self {
            id: link.id,
            clicks: link.clicks(),
            click_history,
            original_url: link.original_url,
            short_code: link.short_code,
            alias: link.alias,
            created_at: link.created_at,
        }
    }
}

/// Response for `GET /api/shorten`.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub links: Vec<LinkResponse>,
}

/// Response for `GET /api/links/{code}`.
#[derive(Debug, Serialize)]
pub struct LinkDetailResponse {
    pub success: bool,
    pub link: LinkResponse,
}

/// Response for `DELETE /api/links/{code}`.
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub success: bool,
}
