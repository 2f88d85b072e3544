#![allow(dead_code)]

use snaplink::prelude::*;
use std::sync::Arc;

pub const BASE_URL: &str = "https://sn.ap";

/// State with a fixed public base URL and an empty registry.
pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::with_repository(repository.clone(), Some(BASE_URL.to_string()));

    (state, repository)
}

/// State that derives the base URL from each request.
pub fn create_origin_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::with_repository(repository.clone(), None);

    (state, repository)
}

pub async fn create_test_link(
    repository: &InMemoryLinkRepository,
    url: &str,
    alias: Option<&str>,
) -> Link {
    repository
        .create(NewLink::new(url, alias.map(str::to_string)))
        .await
        .unwrap()
}
