//! Assessment storage port

use async_trait::async_trait;
use mentor_domain::AssessmentRecord;
use thiserror::Error;

/// Errors that can occur at the storage boundary.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to write the assessment record: {0}")]
    WriteFailed(String),

    #[error("Failed to read assessment records: {0}")]
    ReadFailed(String),
}

/// Durable storage for assessment records.
///
/// One record per `save` call, committed atomically: a reader never sees
/// a partial write. `list_for_owner` returns the owner's records ordered
/// by creation time, ascending.
#[async_trait]
pub trait AssessmentStore: Send + Sync {
    async fn save(&self, record: &AssessmentRecord) -> Result<(), StoreError>;

    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<AssessmentRecord>, StoreError>;
}
