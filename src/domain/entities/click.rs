//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click recorded when a shortened link is visited.
///
/// Client metadata is optional: a missing header is stored as `None`,
/// never as a placeholder string.
#[derive(Debug, Clone, PartialEq)]
pub struct Click {
    pub clicked_at: DateTime<Utc>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(clicked_at: DateTime<Utc>, ip: Option<String>, user_agent: Option<String>) -> Self {
        Self {
            clicked_at,
            ip,
            user_agent,
        }
    }

    /// Creates a click stamped with the current time.
    pub fn now(ip: Option<String>, user_agent: Option<String>) -> Self {
        Self::new(Utc::now(), ip, user_agent)
    }
}
