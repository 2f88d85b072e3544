//! In-memory implementation of [`LinkRepository`].

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::entities::{Click, Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::RegistryError;
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

/// How many candidates are drawn before giving up on a generated code.
pub const MAX_CODE_ATTEMPTS: usize = 10;

#[derive(Debug, Default)]
struct RegistryState {
    links: HashMap<String, Link>,
    /// alias -> short code
    aliases: HashMap<String, String>,
    last_id: i64,
}

impl RegistryState {
    fn is_taken(&self, code: &str) -> bool {
        self.links.contains_key(code) || self.aliases.contains_key(code)
    }
}

/// Process-local link registry.
///
/// Both maps and the id sequence sit behind a single [`RwLock`]. Mutations
/// hold the write lock for their whole duration; reads share the read lock.
/// State is lost when the process exits.
pub struct InMemoryLinkRepository<G: CodeGenerator = RandomCodeGenerator> {
    state: RwLock<RegistryState>,
    generator: G,
}

impl InMemoryLinkRepository<RandomCodeGenerator> {
    /// Creates an empty registry that draws random codes.
    pub fn new() -> Self {
        Self::with_generator(RandomCodeGenerator)
    }
}

impl Default for InMemoryLinkRepository<RandomCodeGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: CodeGenerator> InMemoryLinkRepository<G> {
    /// Creates an empty registry with a custom code source.
    pub fn with_generator(generator: G) -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
            generator,
        }
    }

    fn allocate_code(&self, state: &RegistryState) -> Result<String, RegistryError> {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = self.generator.generate();

            if !state.is_taken(&code) {
                return Ok(code);
            }

            debug!(attempt, code = %code, "Generated short code collided, retrying");
        }

        warn!(
            attempts = MAX_CODE_ATTEMPTS,
            links = state.links.len(),
            "Short code space exhausted"
        );

        Err(RegistryError::CodeSpaceExhausted {
            attempts: MAX_CODE_ATTEMPTS,
        })
    }
}

#[async_trait]
impl<G: CodeGenerator> LinkRepository for InMemoryLinkRepository<G> {
    async fn create(&self, new_link: NewLink) -> Result<Link, RegistryError> {
        let mut state = self.state.write().await;

        let short_code = match &new_link.alias {
            Some(alias) => {
                if state.is_taken(alias) {
                    warn!(alias, "Alias already reserved");
                    return Err(RegistryError::AliasConflict(alias.clone()));
                }
                alias.clone()
            }
            None => self.allocate_code(&state)?,
        };

        state.last_id += 1;
        let link = Link::new(
            state.last_id,
            short_code.clone(),
            new_link.original_url,
            new_link.alias,
            chrono::Utc::now(),
        );

        if let Some(alias) = &link.alias {
            state.aliases.insert(alias.clone(), short_code.clone());
        }
        state.links.insert(short_code, link.clone());

        info!(
            id = link.id,
            short_code = %link.short_code,
            aliased = link.is_aliased(),
            "Link created"
        );

        Ok(link)
    }

    async fn get(&self, short_code: &str) -> Option<Link> {
        self.state.read().await.links.get(short_code).cloned()
    }

    async fn list_all(&self) -> Vec<Link> {
        let state = self.state.read().await;

        let mut links: Vec<Link> = state.links.values().cloned().collect();
        links.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        links
    }

    async fn track_click(
        &self,
        short_code: &str,
        ip: Option<String>,
        user_agent: Option<String>,
    ) -> bool {
        let mut state = self.state.write().await;

        match state.links.get_mut(short_code) {
            Some(link) => {
                link.record_click(Click::now(ip, user_agent));
                debug!(short_code, clicks = link.clicks(), "Click recorded");
                true
            }
            None => false,
        }
    }

    async fn delete(&self, short_code: &str) -> bool {
        let mut state = self.state.write().await;

        let Some(link) = state.links.remove(short_code) else {
            return false;
        };

        if let Some(alias) = &link.alias {
            state.aliases.remove(alias);
        }

        info!(id = link.id, short_code, "Link deleted");

        true
    }

    async fn count(&self) -> usize {
        self.state.read().await.links.len()
    }
}
