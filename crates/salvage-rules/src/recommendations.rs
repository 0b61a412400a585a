//! Ordered recommendation rules.
//!
//! Rules run top to bottom against the full input and append; nothing is
//! deduplicated or re-sorted. Crepitus must stay first.

use salvage_core::models::demographics::SmokingStatus;
use salvage_core::models::grades::WagnerGrade;
use salvage_core::models::input::AssessmentInput;

use crate::subscores::sirs_score;
use crate::tables::{
    ENDOCRINOLOGY_HBA1C, SEPSIS_DIRECTIVE_SIRS, URGENT_VASCULAR_ABI, VASCULAR_REFERRAL_ABI,
};

pub const NECROTIZING_FASCIITIS_WARNING: &str = "EMERGENCY: Crepitus detected. Suspect necrotizing fasciitis or gas gangrene; immediate surgical exploration and debridement required.";
pub const SEPSIS_DIRECTIVE: &str = "Sepsis criteria met (SIRS >= 2): draw blood cultures and start broad-spectrum IV antibiotics within 1 hour.";
pub const URGENT_VASCULAR_REFERRAL: &str =
    "Urgent vascular surgery referral for revascularization assessment (ABI < 0.5).";
pub const VASCULAR_REFERRAL: &str =
    "Vascular surgery referral for arterial duplex and revascularization planning (ABI < 0.7).";
pub const OSTEOMYELITIS_DIRECTIVE: &str = "Osteomyelitis suspected: culture-directed antibiotic course of at least 6 weeks and surgical bone debridement.";
pub const DIALYSIS_COORDINATION: &str =
    "Coordinate wound care, antibiotic dosing and procedures with the dialysis unit.";
pub const ENDOCRINOLOGY_REFERRAL: &str =
    "Endocrinology referral for glycaemic optimization (HbA1c > 9%).";
pub const SURGICAL_DEBRIDEMENT: &str =
    "Surgical debridement of necrotic and infected tissue (Wagner grade 3 or higher).";
pub const OFFLOADING: &str = "Offloading with a total contact cast or removable cast walker.";
pub const WOUND_PHOTOGRAPHY: &str = "Weekly wound photography and measurement.";
pub const NUTRITION: &str = "Nutritional assessment and optimization (protein, albumin, vitamin D).";
pub const SMOKING_CESSATION: &str = "Smoking cessation counselling and pharmacotherapy.";

pub fn generate_recommendations(input: &AssessmentInput) -> Vec<String> {
    let sepsis = input.sepsis();
    let osteo = input.osteomyelitis();
    let abi = input.vascular().affected_abi();

    let mut recs: Vec<&str> = Vec::new();

    if sepsis.crepitus {
        recs.push(NECROTIZING_FASCIITIS_WARNING);
    }
    if sirs_score(sepsis) >= SEPSIS_DIRECTIVE_SIRS {
        recs.push(SEPSIS_DIRECTIVE);
    }
    if abi < URGENT_VASCULAR_ABI {
        recs.push(URGENT_VASCULAR_REFERRAL);
    } else if abi < VASCULAR_REFERRAL_ABI {
        recs.push(VASCULAR_REFERRAL);
    }
    if osteo.probe_to_bone || osteo.visible_bone || osteo.biopsy_positive() {
        recs.push(OSTEOMYELITIS_DIRECTIVE);
    }
    if input.renal().dialysis_dependent {
        recs.push(DIALYSIS_COORDINATION);
    }
    if input.comorbidities().hba1c > ENDOCRINOLOGY_HBA1C {
        recs.push(ENDOCRINOLOGY_REFERRAL);
    }
    if input.wound().wagner_grade >= WagnerGrade::Grade3 {
        recs.push(SURGICAL_DEBRIDEMENT);
    }

    recs.extend([OFFLOADING, WOUND_PHOTOGRAPHY, NUTRITION]);
    if input.demographics().smoking_status == SmokingStatus::Current {
        recs.push(SMOKING_CESSATION);
    }

    recs.into_iter().map(str::to_string).collect()
}
