//! Store key/path conventions.
//!
//! Pure string functions. These define the canonical layout of persisted
//! assessment snapshots, whatever backend holds them.

use uuid::Uuid;

pub const PATIENTS_PREFIX: &str = "patients/";

pub fn patient_assessments_prefix(patient_id: Uuid) -> String {
    format!("patients/{patient_id}/assessments/")
}

pub fn assessment(patient_id: Uuid, assessment_id: Uuid) -> String {
    format!("patients/{patient_id}/assessments/{assessment_id}.json")
}
