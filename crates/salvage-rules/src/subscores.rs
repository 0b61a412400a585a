//! Derived clinical sub-scores: CKD stage, SIRS, qSOFA, sepsis likelihood,
//! ABI interpretation and osteomyelitis likelihood.

use salvage_core::models::osteomyelitis::{MriFinding, OsteomyelitisFindings, XrayFindings};
use salvage_core::models::sepsis::SepsisVitals;
use salvage_core::models::summary::{
    AbiCategory, AbiInterpretation, CkdStage, OsteomyelitisAssessment, OsteomyelitisLikelihood,
    SepsisAssessment, SepsisLikelihood,
};

use crate::tables::*;

pub fn ckd_stage(egfr: f64) -> CkdStage {
    let [stage1, stage2, stage3, stage4] = CKD_STAGE_BOUNDS;
    if egfr >= stage1 {
        CkdStage::Stage1
    } else if egfr >= stage2 {
        CkdStage::Stage2
    } else if egfr >= stage3 {
        CkdStage::Stage3
    } else if egfr >= stage4 {
        CkdStage::Stage4
    } else {
        CkdStage::Stage5
    }
}

/// Count of abnormal SIRS criteria, 0–4.
pub fn sirs_score(vitals: &SepsisVitals) -> u8 {
    [
        vitals.temperature > SIRS_TEMP_HIGH || vitals.temperature < SIRS_TEMP_LOW,
        vitals.heart_rate > SIRS_HEART_RATE,
        vitals.respiratory_rate > SIRS_RESPIRATORY_RATE,
        vitals.wbc > SIRS_WBC_HIGH || vitals.wbc < SIRS_WBC_LOW,
    ]
    .into_iter()
    .filter(|&met| met)
    .count() as u8
}

/// Count of positive qSOFA criteria, 0–3.
pub fn qsofa_score(vitals: &SepsisVitals) -> u8 {
    [
        vitals.altered_mentation,
        vitals.systolic_bp < QSOFA_SYSTOLIC_BP,
        vitals.respiratory_rate >= QSOFA_RESPIRATORY_RATE,
    ]
    .into_iter()
    .filter(|&met| met)
    .count() as u8
}

pub fn sepsis_likelihood(sirs: u8, qsofa: u8) -> SepsisLikelihood {
    if sirs >= 2 && qsofa >= 2 {
        SepsisLikelihood::Definite
    } else if sirs >= 2 || qsofa >= 2 {
        SepsisLikelihood::Probable
    } else if sirs == 1 || qsofa == 1 {
        SepsisLikelihood::Possible
    } else {
        SepsisLikelihood::Unlikely
    }
}

pub fn assess_sepsis(vitals: &SepsisVitals) -> SepsisAssessment {
    let likelihood = sepsis_likelihood(sirs_score(vitals), qsofa_score(vitals));
    SepsisAssessment {
        likelihood,
        urgent: likelihood.is_urgent(),
    }
}

pub fn abi_category(abi: f64) -> AbiCategory {
    if abi > ABI_NON_COMPRESSIBLE {
        AbiCategory::NonCompressible
    } else if abi >= ABI_NORMAL {
        AbiCategory::Normal
    } else if abi >= ABI_MILD_PAD {
        AbiCategory::MildPad
    } else if abi >= ABI_MODERATE_PAD {
        AbiCategory::ModeratePad
    } else {
        AbiCategory::SevereCli
    }
}

pub fn interpret_abi(abi: f64) -> AbiInterpretation {
    AbiInterpretation {
        abi,
        category: abi_category(abi),
    }
}

/// Evidence-weighted osteomyelitis score. These weights are independent of
/// the composite-score contribution in `categories::osteomyelitis`.
pub fn osteomyelitis_score(findings: &OsteomyelitisFindings) -> u32 {
    let mut score = 0;
    if findings.probe_to_bone {
        score += LIKELIHOOD_PROBE_TO_BONE;
    }
    if findings.visible_bone {
        score += LIKELIHOOD_VISIBLE_BONE;
    }
    if findings.sausage_toe {
        score += LIKELIHOOD_SAUSAGE_TOE;
    }
    score += match findings.xray_findings {
        XrayFindings::Normal => 0,
        XrayFindings::Suspicious => LIKELIHOOD_XRAY_SUSPICIOUS,
        XrayFindings::Definite => LIKELIHOOD_XRAY_DEFINITE,
    };
    score += match findings.mri_finding {
        None | Some(MriFinding::Negative) => 0,
        Some(MriFinding::Suspicious) => LIKELIHOOD_MRI_SUSPICIOUS,
        Some(MriFinding::Positive) => LIKELIHOOD_MRI_POSITIVE,
    };
    score += points_above(findings.esr, &LIKELIHOOD_ESR_TIERS);
    if findings.ulcer_duration > LIKELIHOOD_ULCER_WEEKS {
        score += LIKELIHOOD_ULCER_POINTS;
    }
    score
}

pub fn assess_osteomyelitis(findings: &OsteomyelitisFindings) -> OsteomyelitisAssessment {
    let score = osteomyelitis_score(findings);
    let likelihood = if findings.biopsy_positive() {
        OsteomyelitisLikelihood::Confirmed
    } else if score >= LIKELIHOOD_PROBABLE {
        OsteomyelitisLikelihood::Probable
    } else if score >= LIKELIHOOD_POSSIBLE {
        OsteomyelitisLikelihood::Possible
    } else {
        OsteomyelitisLikelihood::Unlikely
    };
    OsteomyelitisAssessment { score, likelihood }
}
