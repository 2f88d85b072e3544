//! API route configuration.

use crate::api::handlers::{
    delete_link_handler, get_link_handler, list_links_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Link management API routes.
///
/// # Endpoints
///
/// - `POST   /shorten`        - Create a short link
/// - `GET    /shorten`        - List all links, most recent first
/// - `GET    /links/{code}`   - Link details with click history
/// - `DELETE /links/{code}`   - Delete a link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", get(list_links_handler).post(shorten_handler))
        .route(
            "/links/{code}",
            get(get_link_handler).delete(delete_link_handler),
        )
}
