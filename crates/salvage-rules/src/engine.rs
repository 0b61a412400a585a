//! The single entry point: `AssessmentInput -> AssessmentResult`.

use salvage_core::error::InvalidInputError;
use salvage_core::models::input::AssessmentInput;
use salvage_core::models::result::AssessmentResult;
use salvage_core::models::summary::ClinicalSummary;

use crate::categorizer::{limb_salvage_probability, recommended_intervention, risk_category};
use crate::classification::{sinbad_score, texas_label};
use crate::composite::{score_breakdown, total_score};
use crate::monitoring::monitoring_plan;
use crate::recommendations::generate_recommendations;
use crate::subscores::{
    assess_osteomyelitis, assess_sepsis, ckd_stage, interpret_abi, qsofa_score, sirs_score,
};
use crate::RULE_VERSION;

/// Score a frozen assessment. Deterministic and infallible for any built
/// [`AssessmentInput`].
pub fn compute_assessment(input: &AssessmentInput) -> AssessmentResult {
    let breakdown = score_breakdown(input);
    let total = total_score(&breakdown);
    let category = risk_category(total);
    let wagner = input.wound().wagner_grade;

    tracing::debug!(
        total_score = total,
        risk_category = ?category,
        rule_version = RULE_VERSION,
        "assessment computed"
    );

    AssessmentResult {
        total_score: total,
        risk_category: category,
        limb_salvage_probability: limb_salvage_probability(category),
        recommended_intervention: recommended_intervention(category, wagner).to_string(),
        breakdown,
        recommendations: generate_recommendations(input),
        monitoring_plan: monitoring_plan(total, input),
        clinical_summary: clinical_summary(input),
        rule_version: RULE_VERSION.to_string(),
    }
}

/// Validate a raw JSON snapshot, then score it. Fails before any scoring
/// when the snapshot is incomplete or malformed.
pub fn compute_from_json(value: serde_json::Value) -> Result<AssessmentResult, InvalidInputError> {
    let input = AssessmentInput::from_json(value)?;
    Ok(compute_assessment(&input))
}

pub fn clinical_summary(input: &AssessmentInput) -> ClinicalSummary {
    let wound = input.wound();
    let sepsis = input.sepsis();
    let vascular = input.vascular();

    ClinicalSummary {
        wagner_grade: wound.wagner_grade,
        texas_grade: wound.texas_grade,
        texas_stage: wound.texas_stage,
        texas_label: texas_label(wound.texas_grade, wound.texas_stage),
        wifi_wound: wound.wifi_wound,
        wifi_ischemia: wound.wifi_ischemia,
        wifi_infection: wound.wifi_infection,
        sinbad_score: sinbad_score(&wound.sinbad),
        ckd_stage: ckd_stage(input.renal().egfr),
        sirs_score: sirs_score(sepsis),
        qsofa_score: qsofa_score(sepsis),
        sepsis: assess_sepsis(sepsis),
        abi_left: interpret_abi(vascular.abi_left),
        abi_right: interpret_abi(vascular.abi_right),
        osteomyelitis: assess_osteomyelitis(input.osteomyelitis()),
    }
}
