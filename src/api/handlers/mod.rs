//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod links;
pub mod redirect;
pub mod shorten;

pub use health::{health_handler, index_handler};
pub use links::{delete_link_handler, get_link_handler};
pub use redirect::redirect_handler;
pub use shorten::{list_links_handler, shorten_handler};
