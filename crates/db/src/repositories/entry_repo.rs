//! Repository for directory entries.

use mobdir_core::entry::Entry;
use mobdir_core::filter::EntryFilter;

use crate::store::{JsonFileStore, StoreError};

/// Result of an insert attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(Entry),
    /// An entry with this number is already stored; nothing was written.
    Duplicate,
}

/// Provides list and insert operations for entries.
pub struct EntryRepo;

impl EntryRepo {
    /// Return entries matching `filter`, in insertion order.
    pub async fn list(
        store: &JsonFileStore,
        filter: &EntryFilter,
    ) -> Result<Vec<Entry>, StoreError> {
        let entries = store.load().await?;
        Ok(filter.apply(entries))
    }

    /// Append `entry` unless its number is already taken.
    ///
    /// The uniqueness check and the write happen under the store's writer
    /// lock, so two concurrent inserts of the same number cannot both win.
    pub async fn create(store: &JsonFileStore, entry: Entry) -> Result<CreateOutcome, StoreError> {
        let _guard = store.lock_for_write().await;

        let mut entries = store.load().await?;
        if entries.iter().any(|e| e.number == entry.number) {
            return Ok(CreateOutcome::Duplicate);
        }

        entries.push(entry.clone());
        store.save(&entries).await?;

        tracing::debug!(total = entries.len(), "Entry appended");
        Ok(CreateOutcome::Created(entry))
    }
}
