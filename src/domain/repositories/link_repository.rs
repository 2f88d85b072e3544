//! Repository trait for the link registry.

use crate::domain::entities::{Link, NewLink};
use crate::error::RegistryError;
use async_trait::async_trait;

/// Registry of short links and their click history.
///
/// Short codes and aliases share one keyspace: a code is unique across
/// generated codes and user aliases alike. Every mutating call is applied
/// atomically, so readers never see a half-created or half-deleted link.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link.
    ///
    /// Uses the alias as the short code when one is given, otherwise
    /// allocates a fresh random code.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AliasConflict`] if the alias is already taken.
    /// Nothing is stored in that case.
    ///
    /// Returns [`RegistryError::CodeSpaceExhausted`] if no free code was found
    /// within the retry budget.
    async fn create(&self, new_link: NewLink) -> Result<Link, RegistryError>;

    /// Finds a link by its short code.
    async fn get(&self, short_code: &str) -> Option<Link>;

    /// Lists every live link, most recently created first.
    async fn list_all(&self) -> Vec<Link>;

    /// Records one click on a link.
    ///
    /// Returns `false` without touching any state if the code is unknown.
    async fn track_click(
        &self,
        short_code: &str,
        ip: Option<String>,
        user_agent: Option<String>,
    ) -> bool;

    /// Removes a link and releases its alias.
    ///
    /// Returns `true` if a link was actually removed.
    async fn delete(&self, short_code: &str) -> bool;

    /// Number of live links.
    async fn count(&self) -> usize;
}
