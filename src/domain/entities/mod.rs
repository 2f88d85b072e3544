//! Core domain entities.
//!
//! - [`Link`] - A shortened URL with its click history
//! - [`Click`] - A single redirect event
//!
//! `NewLink` carries the input for creating a link; everything else on
//! [`Link`] is assigned by the registry.

pub mod click;
pub mod link;

pub use click::Click;
pub use link::{Link, NewLink};
