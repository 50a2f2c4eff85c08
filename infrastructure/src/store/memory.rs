//! In-memory assessment store for demo mode and tests.

use async_trait::async_trait;
use mentor_application::ports::assessment_store::{AssessmentStore, StoreError};
use mentor_domain::AssessmentRecord;
use std::sync::Mutex;

/// Volatile store; everything is lost when the process exits.
#[derive(Default)]
pub struct InMemoryAssessmentStore {
    records: Mutex<Vec<AssessmentRecord>>,
}

impl InMemoryAssessmentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssessmentStore for InMemoryAssessmentStore {
    async fn save(&self, record: &AssessmentRecord) -> Result<(), StoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::WriteFailed("store lock poisoned".to_string()))?;
        records.push(record.clone());
        Ok(())
    }

    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<AssessmentRecord>, StoreError> {
        let records = self
            .records
            .lock()
            .map_err(|_| StoreError::ReadFailed("store lock poisoned".to_string()))?;
        let mut owned: Vec<AssessmentRecord> = records
            .iter()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by_key(|r| r.created_at);
        Ok(owned)
    }
}
