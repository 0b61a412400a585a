use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::input::AssessmentInput;
use super::result::AssessmentResult;

/// A persisted assessment: the frozen input, the result computed from it,
/// and the rule version that produced the result. Never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoredAssessment {
    pub assessment_id: Uuid,
    pub patient_id: Uuid,
    pub rule_version: String,
    pub input: AssessmentInput,
    pub result: AssessmentResult,
    pub assessed_by: Option<String>,
    pub created_at: jiff::Timestamp,
}
