//! salvage-storage
//!
//! Persistence boundary for computed assessments. Records are write-once
//! snapshots keyed by `(patient_id, assessment_id)`; nothing here ever
//! recomputes a stored result.

pub mod error;
pub mod file;
pub mod memory;

use uuid::Uuid;

use salvage_core::models::stored::StoredAssessment;

use crate::error::StorageError;

/// A store of assessment snapshots.
pub trait AssessmentStore: Send + Sync {
    /// Persist a new snapshot. Fails with [`StorageError::AlreadyExists`]
    /// rather than overwrite.
    fn put(
        &self,
        record: &StoredAssessment,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    fn get(
        &self,
        patient_id: Uuid,
        assessment_id: Uuid,
    ) -> impl Future<Output = Result<StoredAssessment, StorageError>> + Send;

    /// All snapshots for one patient, newest first.
    fn list(
        &self,
        patient_id: Uuid,
    ) -> impl Future<Output = Result<Vec<StoredAssessment>, StorageError>> + Send;

    fn delete(&self, assessment_id: Uuid) -> impl Future<Output = Result<(), StorageError>> + Send;
}

pub use file::FileStore;
pub use memory::MemoryStore;

pub(crate) fn newest_first(records: &mut [StoredAssessment]) {
    records.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.assessment_id.cmp(&b.assessment_id))
    });
}
