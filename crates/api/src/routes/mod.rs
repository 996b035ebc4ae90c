pub mod entries;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the route tree.
///
/// ```text
/// GET    /          health check
/// GET    /states    -> list_states
/// POST   /add       -> add_entry
/// GET    /search    -> search_entries
/// *      (other)    -> 404 JSON
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(entries::router())
}
