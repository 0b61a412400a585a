use salvage_core::models::input::AssessmentInput;
use salvage_core::models::result::{Consult, FollowUpFrequency, MonitoringPlan};

use crate::tables::{ENDOCRINOLOGY_HBA1C, FOLLOW_UP_THRESHOLDS, VASCULAR_REFERRAL_ABI};

pub fn follow_up_frequency(total_score: u32) -> FollowUpFrequency {
    FOLLOW_UP_THRESHOLDS
        .iter()
        .find(|(min, _)| total_score >= *min)
        .map_or(FollowUpFrequency::BiWeekly, |&(_, frequency)| frequency)
}

pub fn required_consults(input: &AssessmentInput) -> Vec<Consult> {
    let osteo = input.osteomyelitis();
    [
        (
            input.vascular().affected_abi() < VASCULAR_REFERRAL_ABI,
            Consult::VascularSurgery,
        ),
        (
            osteo.probe_to_bone || input.sepsis().crepitus,
            Consult::InfectiousDisease,
        ),
        (input.renal().dialysis_dependent, Consult::Nephrology),
        (
            input.comorbidities().hba1c > ENDOCRINOLOGY_HBA1C,
            Consult::Endocrinology,
        ),
    ]
    .into_iter()
    .filter_map(|(needed, consult)| needed.then_some(consult))
    .collect()
}

pub fn monitoring_plan(total_score: u32, input: &AssessmentInput) -> MonitoringPlan {
    MonitoringPlan {
        follow_up_frequency: follow_up_frequency(total_score),
        required_consults: required_consults(input),
    }
}
