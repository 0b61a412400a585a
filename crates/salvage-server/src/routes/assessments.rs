use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde_json::json;
use uuid::Uuid;

use salvage_audit::events::action;
use salvage_audit::AuditEvent;
use salvage_core::models::input::AssessmentInput;
use salvage_core::models::result::AssessmentResult;
use salvage_core::models::stored::StoredAssessment;
use salvage_rules::{compute_assessment, RULE_VERSION};
use salvage_storage::AssessmentStore;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the clinician identifier. Authentication happens
/// upstream; this is recorded, not verified.
pub const CLINICIAN_HEADER: &str = "x-clinician-id";

fn clinician(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CLINICIAN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Score a snapshot without storing it.
pub async fn compute(
    headers: HeaderMap,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<AssessmentResult>, ApiError> {
    let Json(body) = body?;
    let input = AssessmentInput::from_json(body)?;
    let result = compute_assessment(&input);

    AuditEvent::assessment(
        action::COMPUTED,
        "unsaved",
        clinician(&headers).unwrap_or_else(|| "anonymous".to_string()),
    )
    .with_details(json!({
        "total_score": result.total_score,
        "risk_category": result.risk_category,
        "rule_version": result.rule_version,
    }))
    .emit();

    Ok(Json(result))
}

/// Validate, compute once, and persist the snapshot with its rule version.
pub async fn create_assessment<S: AssessmentStore>(
    State(state): State<AppState<S>>,
    Path(patient_id): Path<Uuid>,
    headers: HeaderMap,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<StoredAssessment>, ApiError> {
    let Json(body) = body?;
    let input = AssessmentInput::from_json(body)?;
    let result = compute_assessment(&input);
    let assessed_by = clinician(&headers);

    let record = StoredAssessment {
        assessment_id: Uuid::new_v4(),
        patient_id,
        rule_version: RULE_VERSION.to_string(),
        input,
        result,
        assessed_by: assessed_by.clone(),
        created_at: jiff::Timestamp::now(),
    };
    state.store.put(&record).await?;

    AuditEvent::assessment(
        action::STORED,
        record.assessment_id,
        assessed_by.unwrap_or_else(|| "anonymous".to_string()),
    )
    .with_details(json!({
        "patient_id": patient_id,
        "total_score": record.result.total_score,
        "risk_category": record.result.risk_category,
        "rule_version": record.rule_version,
    }))
    .emit();

    Ok(Json(record))
}

pub async fn list_assessments<S: AssessmentStore>(
    State(state): State<AppState<S>>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Vec<StoredAssessment>>, ApiError> {
    let records = state.store.list(patient_id).await?;
    Ok(Json(records))
}

pub async fn get_assessment<S: AssessmentStore>(
    State(state): State<AppState<S>>,
    Path((patient_id, assessment_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<StoredAssessment>, ApiError> {
    let record = state.store.get(patient_id, assessment_id).await?;
    Ok(Json(record))
}

pub async fn delete_assessment<S: AssessmentStore>(
    State(state): State<AppState<S>>,
    Path(assessment_id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<()>, ApiError> {
    state.store.delete(assessment_id).await?;

    AuditEvent::assessment(
        action::DELETED,
        assessment_id,
        clinician(&headers).unwrap_or_else(|| "anonymous".to_string()),
    )
    .emit();

    Ok(Json(()))
}
