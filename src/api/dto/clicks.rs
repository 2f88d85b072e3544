//! DTOs for click event data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Click;

/// Individual click event information.
///
/// Optional fields are omitted from JSON when `None`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl From<&Click> for ClickInfo {
    fn from(click: &Click) -> Self {
        Self {
            timestamp: click.clicked_at,
            ip: click.ip.clone(),
            user_agent: click.user_agent.clone(),
        }
    }
}
