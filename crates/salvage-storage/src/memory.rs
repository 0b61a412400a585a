use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use salvage_core::models::stored::StoredAssessment;
use salvage_core::store_keys;

use crate::error::StorageError;
use crate::{newest_first, AssessmentStore};

/// In-process store, keyed by assessment ID. Used by tests and by callers
/// that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<Uuid, StoredAssessment>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AssessmentStore for MemoryStore {
    async fn put(&self, record: &StoredAssessment) -> Result<(), StorageError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.assessment_id) {
            return Err(StorageError::AlreadyExists {
                key: store_keys::assessment(record.patient_id, record.assessment_id),
            });
        }
        records.insert(record.assessment_id, record.clone());
        Ok(())
    }

    async fn get(
        &self,
        patient_id: Uuid,
        assessment_id: Uuid,
    ) -> Result<StoredAssessment, StorageError> {
        self.records
            .read()
            .await
            .get(&assessment_id)
            .filter(|r| r.patient_id == patient_id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                key: store_keys::assessment(patient_id, assessment_id),
            })
    }

    async fn list(&self, patient_id: Uuid) -> Result<Vec<StoredAssessment>, StorageError> {
        let mut records: Vec<StoredAssessment> = self
            .records
            .read()
            .await
            .values()
            .filter(|r| r.patient_id == patient_id)
            .cloned()
            .collect();
        newest_first(&mut records);
        Ok(records)
    }

    async fn delete(&self, assessment_id: Uuid) -> Result<(), StorageError> {
        self.records
            .write()
            .await
            .remove(&assessment_id)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound {
                key: assessment_id.to_string(),
            })
    }
}
