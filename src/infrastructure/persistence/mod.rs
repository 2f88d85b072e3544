//! Link storage implementations.
//!
//! - [`InMemoryLinkRepository`] - process-local registry guarded by a single lock

pub mod memory_link_repository;

pub use memory_link_repository::{InMemoryLinkRepository, MAX_CODE_ATTEMPTS};
