use std::sync::Arc;

use mobdir_db::JsonFileStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store lives behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Entry store. Owns the backing file and its writer lock.
    pub store: Arc<JsonFileStore>,
}
