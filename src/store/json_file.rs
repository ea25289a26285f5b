use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tokio::sync::Mutex;

use super::{ContactStore, StoreError};
use crate::models::Submission;

/// File-backed store: a single pretty-printed JSON array, rewritten in
/// full on every append. A missing file or empty content reads as the
/// empty array; content that is not a JSON array fails the operation
/// without writing anything.
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes the read-modify-write cycle. Without it, two
    // concurrent appends can interleave and silently drop a record.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Existing entries are kept as raw values so legacy records with
    /// a different shape survive an append untouched.
    async fn read_entries(&self) -> Result<Vec<Value>, StoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::Io(err)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(StoreError::Corrupt)
    }

    async fn write_entries(&self, entries: &[Value]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_vec_pretty(entries).map_err(StoreError::Corrupt)?;
        fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl ContactStore for JsonFileStore {
    async fn append(&self, submission: Submission) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries().await?;
        entries.push(serde_json::to_value(&submission).map_err(StoreError::Corrupt)?);
        self.write_entries(&entries).await?;

        tracing::debug!(total = entries.len(), "Appended contact submission");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Submission>, StoreError> {
        let entries = self.read_entries().await?;
        entries
            .into_iter()
            .map(|value| serde_json::from_value(value).map_err(StoreError::Corrupt))
            .collect()
    }
}
