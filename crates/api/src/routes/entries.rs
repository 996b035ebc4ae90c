//! Route definitions for directory entries and the state list.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{entries, states};
use crate::state::AppState;

/// Entry routes mounted at the root.
///
/// ```text
/// GET    /states    -> list_states
/// POST   /add       -> add_entry
/// GET    /search    -> search_entries
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/states", get(states::list_states))
        .route("/add", post(entries::add_entry))
        .route("/search", get(entries::search_entries))
}
