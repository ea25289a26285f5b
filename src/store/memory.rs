use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ContactStore, StoreError};
use crate::models::Submission;

/// In-memory store. Reference semantics for the trait; used in tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<Vec<Submission>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn append(&self, submission: Submission) -> Result<(), StoreError> {
        self.entries.write().await.push(submission);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Submission>, StoreError> {
        Ok(self.entries.read().await.clone())
    }
}
