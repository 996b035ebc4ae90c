//! Repository layer over [`JsonFileStore`](crate::JsonFileStore).

pub mod entry_repo;

pub use entry_repo::{CreateOutcome, EntryRepo};
