//! Flat-file persistence for the mobile directory.
//!
//! The whole collection lives in one pretty-printed JSON array. Reads load
//! the full list; writes rewrite the full file. Writers are serialized by a
//! single async lock held across the read-modify-write cycle.

pub mod repositories;
pub mod store;

pub use store::{JsonFileStore, StoreError};

/// Verify that the backing file is either absent or parseable.
///
/// Mirrors a connection check: a corrupt document is an operational error,
/// not an empty directory.
pub async fn health_check(store: &JsonFileStore) -> Result<(), StoreError> {
    store.load().await.map(|_| ())
}
