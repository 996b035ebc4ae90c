//! Response payloads that are more than a bare entry list.

use mobdir_core::entry::Entry;
use serde::Serialize;

pub const ENTRY_ADDED_MSG: &str = "Number added successfully!";

/// Body of a `201 Created` from `POST /add`.
#[derive(Debug, Serialize)]
pub struct EntryCreatedResponse {
    pub message: &'static str,
    /// The entry as stored, after normalization.
    pub entry: Entry,
}
