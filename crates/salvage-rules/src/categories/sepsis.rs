use salvage_core::models::input::AssessmentInput;

use crate::subscores::sirs_score;
use crate::tables::*;
use crate::ScoreCategory;

/// Systemic and local infection severity.
pub struct SepsisIndicators;

impl ScoreCategory for SepsisIndicators {
    fn id(&self) -> &str {
        "sepsis"
    }

    fn name(&self) -> &str {
        "Sepsis Indicators"
    }

    fn max_score(&self) -> u32 {
        SEPSIS_MAX
    }

    fn raw_score(&self, input: &AssessmentInput) -> u32 {
        let s = input.sepsis();
        let sirs = (u32::from(sirs_score(s)) * SIRS_POINTS_PER_CRITERION).min(SIRS_POINTS_CAP);

        sirs + [
            (s.altered_mentation, ALTERED_MENTATION_POINTS),
            (s.systolic_bp < QSOFA_SYSTOLIC_BP, HYPOTENSION_POINTS),
            (s.crepitus, CREPITUS_POINTS),
            (s.crp > CRP_THRESHOLD, CRP_POINTS),
        ]
        .into_iter()
        .filter_map(|(present, points)| present.then_some(points))
        .sum::<u32>()
    }
}
