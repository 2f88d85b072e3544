//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::InMemoryLinkRepository;

/// Link service backed by the process-local registry.
pub type AppLinkService = LinkService<InMemoryLinkRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    /// Public base URL for short links. When unset, the request origin is used.
    pub base_url: Option<String>,
}

impl AppState {
    /// Builds state around a fresh, empty registry.
    pub fn new(base_url: Option<String>) -> Self {
        Self::with_repository(Arc::new(InMemoryLinkRepository::new()), base_url)
    }

    /// Builds state around an existing registry.
    pub fn with_repository(
        repository: Arc<InMemoryLinkRepository>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository)),
            base_url,
        }
    }
}
