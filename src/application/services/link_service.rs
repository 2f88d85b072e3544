//! Link creation, lookup, redirect resolution and removal.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::validate_alias;
use serde_json::json;
use tracing::debug;

/// Service for creating and resolving shortened links.
///
/// Applies boundary validation (URL well-formedness, alias rules) before
/// handing requests to the registry. URLs are stored exactly as submitted.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link.
    ///
    /// An empty alias is treated as no alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL does not parse, contains
    /// control characters, or the alias breaks the alias rules.
    ///
    /// Returns [`AppError::Conflict`] if the alias is already taken.
    pub async fn create_short_link(
        &self,
        original_url: String,
        alias: Option<String>,
    ) -> Result<Link, AppError> {
        url::Url::parse(&original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        // The parser drops tabs and newlines, but the stored URL goes into a
        // Location header verbatim and must not carry them.
        if original_url.chars().any(char::is_control) {
            return Err(AppError::bad_request(
                "Invalid URL format",
                json!({ "reason": "URL contains control characters" }),
            ));
        }

        let alias = alias.filter(|a| !a.is_empty());
        if let Some(alias) = &alias {
            validate_alias(alias)?;
        }

        let link = self
            .link_repository
            .create(NewLink::new(original_url, alias))
            .await?;

        Ok(link)
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn get_link(&self, short_code: &str) -> Result<Link, AppError> {
        self.link_repository
            .get(short_code)
            .await
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": short_code })))
    }

    /// Lists all links, most recent first.
    pub async fn list_links(&self) -> Vec<Link> {
        self.link_repository.list_all().await
    }

    /// Deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn delete_link(&self, short_code: &str) -> Result<(), AppError> {
        if self.link_repository.delete(short_code).await {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Link not found",
                json!({ "code": short_code }),
            ))
        }
    }

    /// Resolves a redirect and records the visit.
    ///
    /// Returns `None` for unknown codes; callers send the visitor home.
    pub async fn resolve_redirect(
        &self,
        short_code: &str,
        ip: Option<String>,
        user_agent: Option<String>,
    ) -> Option<String> {
        let Some(link) = self.link_repository.get(short_code).await else {
            debug!(short_code, "Unknown short code");
            return None;
        };

        if !self
            .link_repository
            .track_click(short_code, ip, user_agent)
            .await
        {
            debug!(short_code, "Link removed before click was recorded");
        }

        Some(link.original_url)
    }

    /// Number of live links.
    pub async fn count_links(&self) -> usize {
        self.link_repository.count().await
    }

    /// Constructs the full short URL from a base URL and code.
    pub fn get_short_url(&self, base_url: &str, short_code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), short_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::error::RegistryError;
    use chrono::Utc;

    fn create_test_link(id: i64, code: &str, url: &str, alias: Option<&str>) -> Link {
        Link::new(
            id,
            code.to_string(),
            url.to_string(),
            alias.map(str::to_string),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_create_short_link_success() {
        let mut mock_link_repo = MockLinkRepository::new();

        let created_link = create_test_link(1, "abc123", "https://example.com", None);
        mock_link_repo
            .expect_create()
            .withf(|new_link| {
                new_link.original_url == "https://example.com" && new_link.alias.is_none()
            })
            .times(1)
            .returning(move |_| Ok(created_link.clone()));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let link = service
            .create_short_link("https://example.com".to_string(), None)
            .await
            .unwrap();

        assert_eq!(link.short_code, "abc123");
        assert_eq!(link.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_create_short_link_keeps_url_verbatim() {
        let mut mock_link_repo = MockLinkRepository::new();

        let created_link = create_test_link(1, "abc123", "HTTPS://Example.COM:443/Path", None);
        mock_link_repo
            .expect_create()
            .withf(|new_link| new_link.original_url == "HTTPS://Example.COM:443/Path")
            .times(1)
            .returning(move |_| Ok(created_link.clone()));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service
            .create_short_link("HTTPS://Example.COM:443/Path".to_string(), None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_short_link_invalid_url() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service
            .create_short_link("not-a-url".to_string(), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_short_link_rejects_control_characters() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_link_repo));

        for url in [
            "https://example.com/a\nb",
            "https://example.com/a\tb",
            "https://example.com/\r\nSet-Cookie: x=1",
        ] {
            let err = service
                .create_short_link(url.to_string(), None)
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }), "{url:?}");
        }
    }

    #[tokio::test]
    async fn test_create_short_link_allows_non_ascii() {
        let mut mock_link_repo = MockLinkRepository::new();

        let created_link = create_test_link(1, "cafe", "https://example.com/café", Some("cafe"));
        mock_link_repo
            .expect_create()
            .withf(|new_link| new_link.original_url == "https://example.com/café")
            .times(1)
            .returning(move |_| Ok(created_link.clone()));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service
            .create_short_link(
                "https://example.com/café".to_string(),
                Some("cafe".to_string()),
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_short_link_invalid_alias() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service
            .create_short_link("https://example.com".to_string(), Some("a!".to_string()))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_short_link_empty_alias_is_ignored() {
        let mut mock_link_repo = MockLinkRepository::new();

        let created_link = create_test_link(1, "xyz789", "https://example.com", None);
        mock_link_repo
            .expect_create()
            .withf(|new_link| new_link.alias.is_none())
            .times(1)
            .returning(move |_| Ok(created_link.clone()));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service
            .create_short_link("https://example.com".to_string(), Some(String::new()))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_short_link_alias_conflict() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo
            .expect_create()
            .times(1)
            .returning(|new_link| Err(RegistryError::AliasConflict(new_link.alias.unwrap())));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service
            .create_short_link("https://example.com".to_string(), Some("taken".to_string()))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_get_link_not_found() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_get().times(1).returning(|_| None);

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service.get_link("missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_link_not_found() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_delete().times(1).returning(|_| false);

        let service = LinkService::new(Arc::new(mock_link_repo));

        assert!(matches!(
            service.delete_link("missing").await.unwrap_err(),
            AppError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_resolve_redirect_tracks_click() {
        let mut mock_link_repo = MockLinkRepository::new();

        let link = create_test_link(1, "abc123", "https://example.com/x", None);
        mock_link_repo
            .expect_get()
            .times(1)
            .returning(move |_| Some(link.clone()));
        mock_link_repo
            .expect_track_click()
            .withf(|code, ip, ua| {
                code == "abc123"
                    && ip.as_deref() == Some("1.2.3.4")
                    && ua.as_deref() == Some("test-agent")
            })
            .times(1)
            .returning(|_, _, _| true);

        let service = LinkService::new(Arc::new(mock_link_repo));

        let target = service
            .resolve_redirect(
                "abc123",
                Some("1.2.3.4".to_string()),
                Some("test-agent".to_string()),
            )
            .await;

        assert_eq!(target.as_deref(), Some("https://example.com/x"));
    }

    #[tokio::test]
    async fn test_resolve_redirect_unknown_code() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_get().times(1).returning(|_| None);
        mock_link_repo.expect_track_click().times(0);

        let service = LinkService::new(Arc::new(mock_link_repo));

        assert!(service.resolve_redirect("nope", None, None).await.is_none());
    }

    #[test]
    fn test_get_short_url_trims_trailing_slash() {
        let service = LinkService::new(Arc::new(MockLinkRepository::new()));

        assert_eq!(
            service.get_short_url("https://sn.ap/", "abc123"),
            "https://sn.ap/abc123"
        );
        assert_eq!(
            service.get_short_url("http://localhost:3000", "promo"),
            "http://localhost:3000/promo"
        );
    }
}
