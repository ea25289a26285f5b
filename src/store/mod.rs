pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::models::Submission;

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Corrupt(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "I/O error: {err}"),
            StoreError::Corrupt(err) => write!(f, "Corrupt backing store: {err}"),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

/// Append-only log of contact submissions.
///
/// Injected into the app state as a trait object so the sink handler
/// never touches the backing medium directly.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Append one submission. Arrival order is preserved.
    async fn append(&self, submission: Submission) -> Result<(), StoreError>;

    /// All stored submissions in append order.
    async fn list(&self) -> Result<Vec<Submission>, StoreError>;
}
