//! # snaplink
//!
//! A small URL shortening service built with Axum. Links, aliases and click
//! history are kept in an in-memory registry for the lifetime of the process.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link and click entities, registry trait
//! - **Application Layer** ([`application`]) - Validation and redirect resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random 6-character codes or custom aliases
//! - Click counting with per-visit IP and user agent
//! - Most-recent-first link listing
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:3000"  # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, RegistryError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Click, Link, NewLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::{AppError, RegistryError};
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::state::AppState;
}
