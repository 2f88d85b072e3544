//! Link entity representing a shortened URL and its click history.

use chrono::{DateTime, Utc};

use super::click::Click;

/// A shortened URL link with its click history.
///
/// `short_code` is either randomly generated or equal to `alias`.
/// `clicks` always matches the length of `click_history`; both are only
/// changed through [`Link::record_click`].
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub alias: Option<String>,
    pub created_at: DateTime<Utc>,
    clicks: u64,
    click_history: Vec<Click>,
}

impl Link {
    /// Creates a new Link with no clicks recorded.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        alias: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            alias,
            created_at,
            clicks: 0,
            click_history: Vec::new(),
        }
    }

    /// Number of recorded redirects.
    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    /// Recorded redirects, oldest first.
    pub fn click_history(&self) -> &[Click] {
        &self.click_history
    }

    /// Appends a click and bumps the counter.
    pub fn record_click(&mut self, click: Click) {
        self.click_history.push(click);
        self.clicks += 1;
    }

    /// Returns true if the short code was chosen by the user.
    pub fn is_aliased(&self) -> bool {
        self.alias.is_some()
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLink {
    pub original_url: String,
    pub alias: Option<String>,
}

impl NewLink {
    pub fn new(original_url: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            original_url: original_url.into(),
            alias,
        }
    }
}
