use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use salvage_core::models::stored::StoredAssessment;
use salvage_core::store_keys;

use crate::error::StorageError;
use crate::{newest_first, AssessmentStore};

/// JSON files on local disk, laid out by [`store_keys`] under `root`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Path of `assessment_id` under whichever patient holds it.
    async fn locate(&self, assessment_id: Uuid) -> Result<Option<PathBuf>, StorageError> {
        let patients_dir = self.path_for(store_keys::PATIENTS_PREFIX);
        let mut patients = match tokio::fs::read_dir(&patients_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let filename = format!("{assessment_id}.json");
        while let Some(patient) = patients.next_entry().await? {
            if !patient.file_type().await?.is_dir() {
                continue;
            }
            let candidate = patient.path().join("assessments").join(&filename);
            if tokio::fs::try_exists(&candidate).await? {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }
}

impl AssessmentStore for FileStore {
    /// Write to a temp file, then hard-link it into place. The link fails
    /// if the target exists, so a stored snapshot is never clobbered.
    /// Assessment IDs are unique across patients.
    async fn put(&self, record: &StoredAssessment) -> Result<(), StorageError> {
        let key = store_keys::assessment(record.patient_id, record.assessment_id);
        if self.locate(record.assessment_id).await?.is_some() {
            return Err(StorageError::AlreadyExists { key });
        }
        let path = self.path_for(&key);
        let json = serde_json::to_vec_pretty(record)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp_path = path.with_extension(format!("{}.tmp", Uuid::new_v4()));
        tokio::fs::write(&tmp_path, &json).await?;

        let linked = tokio::fs::hard_link(&tmp_path, &path).await;
        if let Err(e) = tokio::fs::remove_file(&tmp_path).await {
            tracing::warn!(error = %e, path = %tmp_path.display(), "failed to remove temp file");
        }
        match linked {
            Ok(()) => {
                tracing::debug!(key = %key, "assessment written");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(StorageError::AlreadyExists { key })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn get(
        &self,
        patient_id: Uuid,
        assessment_id: Uuid,
    ) -> Result<StoredAssessment, StorageError> {
        let key = store_keys::assessment(patient_id, assessment_id);
        read_record(&self.path_for(&key), key).await
    }

    async fn list(&self, patient_id: Uuid) -> Result<Vec<StoredAssessment>, StorageError> {
        let dir = self.path_for(&store_keys::patient_assessments_prefix(patient_id));
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let key = path.display().to_string();
            records.push(read_record(&path, key).await?);
        }

        newest_first(&mut records);
        Ok(records)
    }

    async fn delete(&self, assessment_id: Uuid) -> Result<(), StorageError> {
        let not_found = || StorageError::NotFound {
            key: assessment_id.to_string(),
        };
        let path = self.locate(assessment_id).await?.ok_or_else(not_found)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "assessment deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(not_found()),
            Err(e) => Err(e.into()),
        }
    }
}

async fn read_record(path: &Path, key: String) -> Result<StoredAssessment, StorageError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StorageError::NotFound { key: key.clone() }
        } else {
            StorageError::Io(e)
        }
    })?;
    let record: StoredAssessment = serde_json::from_slice(&bytes)?;
    Ok(record)
}
