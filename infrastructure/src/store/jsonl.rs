//! JSONL file store for assessment records.
//!
//! Each record is serialized as a single JSON line and appended via a
//! buffered writer, flushed after every write. Reads re-scan the file,
//! filter by owner, and return records ordered by creation time.

use async_trait::async_trait;
use mentor_application::ports::assessment_store::{AssessmentStore, StoreError};
use mentor_domain::AssessmentRecord;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Append-only JSONL assessment store.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. One line per record keeps
/// every write atomic at line granularity; a reader never sees a partial
/// record.
pub struct JsonlAssessmentStore {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlAssessmentStore {
    /// Open (or create) the record file at the given path.
    ///
    /// Creates parent directories if they don't exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the record file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AssessmentStore for JsonlAssessmentStore {
    async fn save(&self, record: &AssessmentRecord) -> Result<(), StoreError> {
        let line =
            serde_json::to_string(record).map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| StoreError::WriteFailed("store writer lock poisoned".to_string()))?;
        writeln!(writer, "{}", line).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        // Flush immediately so a crash never loses a committed record
        writer
            .flush()
            .map_err(|e| StoreError::WriteFailed(e.to_string()))
    }

    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<AssessmentRecord>, StoreError> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        let mut records = Vec::new();
        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let record: AssessmentRecord =
                serde_json::from_str(line).map_err(|e| StoreError::ReadFailed(e.to_string()))?;
            if record.owner_id == owner_id {
                records.push(record);
            }
        }
        records.sort_by_key(|r| r.created_at);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mentor_domain::AssessmentCategory;

    fn record(owner: &str, score: f64, created_at: chrono::DateTime<Utc>) -> AssessmentRecord {
        AssessmentRecord {
            owner_id: owner.to_string(),
            quiz_score_percent: score,
            technical_score_percent: None,
            communication_score_percent: None,
            category: AssessmentCategory::Technical,
            questions: vec![],
            strengths: vec![],
            improvement_areas: vec![],
            improvement_tip: Some("Review joins.".to_string()),
            created_at,
        }
    }

    #[tokio::test]
    async fn test_save_and_list_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlAssessmentStore::new(dir.path().join("assessments.jsonl")).unwrap();

        let first = record("owner-1", 70.0, Utc.with_ymd_and_hms(2025, 1, 2, 9, 0, 0).unwrap());
        let second = record("owner-1", 90.0, Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap());
        store.save(&first).await.unwrap();
        store.save(&second).await.unwrap();

        let records = store.list_for_owner("owner-1").await.unwrap();
        assert_eq!(records.len(), 2);
        // Ascending by creation time, not by insertion order
        assert_eq!(records[0].quiz_score_percent, 90.0);
        assert_eq!(records[1].quiz_score_percent, 70.0);
        assert_eq!(records[1].improvement_tip.as_deref(), Some("Review joins."));
    }

    #[tokio::test]
    async fn test_list_scopes_to_owner() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlAssessmentStore::new(dir.path().join("assessments.jsonl")).unwrap();

        store
            .save(&record("owner-1", 50.0, Utc::now()))
            .await
            .unwrap();
        store
            .save(&record("owner-2", 60.0, Utc::now()))
            .await
            .unwrap();

        let records = store.list_for_owner("owner-2").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].owner_id, "owner-2");
    }

    #[tokio::test]
    async fn test_new_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("assessments.jsonl");
        let store = JsonlAssessmentStore::new(&nested).unwrap();
        assert_eq!(store.path(), nested.as_path());
        assert!(store.list_for_owner("nobody").await.unwrap().is_empty());
    }
}
