use std::io::ErrorKind;
use std::path::PathBuf;

use mobdir_core::entry::Entry;
use tokio::sync::{Mutex, MutexGuard};

/// Failures reading or writing the backing document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a JSON array of entries.
    #[error("Corrupt data file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize entries: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The entry collection, stored as a single JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Load every stored entry in insertion order.
    ///
    /// A missing file is an empty directory. A file that does not parse is
    /// reported as [`StoreError::Corrupt`].
    pub async fn load(&self) -> Result<Vec<Entry>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Data file absent, treating as empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the stored collection with `entries`.
    ///
    /// Output is a 2-space indented UTF-8 array with non-ASCII left
    /// unescaped. The document is written to a sibling temp file and renamed
    /// into place so readers never observe a partial write.
    pub async fn save(&self, entries: &[Entry]) -> Result<(), StoreError> {
        let mut body = serde_json::to_vec_pretty(entries)?;
        body.push(b'\n');

        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, &body)
            .await
            .map_err(|source| StoreError::Io {
                path: tmp_path.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(path = %self.path.display(), count = entries.len(), "Data file written");
        Ok(())
    }

    /// Acquire the writer lock. Hold the guard across load + save.
    pub async fn lock_for_write(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "data.json".into());
        self.path.with_file_name(format!(".{file_name}.tmp"))
    }
}
