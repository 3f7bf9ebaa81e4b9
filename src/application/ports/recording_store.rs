use async_trait::async_trait;

use crate::domain::RecordingEntry;

/// Persistent store for consultation recordings.
///
/// `save` with an existing id replaces that entry, never appends a
/// duplicate. `delete` reports whether an entry was actually removed.
#[async_trait]
pub trait RecordingStore: Send + Sync {
    async fn save(&self, entry: &RecordingEntry) -> Result<(), StoreError>;

    async fn get(&self, id: &str) -> Result<Option<RecordingEntry>, StoreError>;

    async fn get_all(&self) -> Result<Vec<RecordingEntry>, StoreError>;

    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("malformed record: {0}")]
    Malformed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
