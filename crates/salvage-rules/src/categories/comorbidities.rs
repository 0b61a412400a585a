use salvage_core::models::input::AssessmentInput;

use crate::tables::*;
use crate::ScoreCategory;

pub struct ComorbidityBurden;

impl ScoreCategory for ComorbidityBurden {
    fn id(&self) -> &str {
        "comorbidities"
    }

    fn name(&self) -> &str {
        "Comorbidities"
    }

    fn max_score(&self) -> u32 {
        COMORBIDITIES_MAX
    }

    fn raw_score(&self, input: &AssessmentInput) -> u32 {
        let c = input.comorbidities();
        let flagged = [
            (c.dialysis, DIALYSIS_COMORBIDITY_POINTS),
            (c.congestive_heart_failure, CHF_POINTS),
            (c.coronary_artery_disease, CAD_POINTS),
            (c.peripheral_vascular_disease, PVD_POINTS),
            (c.previous_amputation, PREVIOUS_AMPUTATION_POINTS),
        ]
        .into_iter()
        .filter_map(|(present, points)| present.then_some(points))
        .sum::<u32>();

        flagged + points_above(c.hba1c, &HBA1C_TIERS)
    }
}
