use salvage_core::models::input::AssessmentInput;

use crate::tables::{points_below, DIALYSIS_DEPENDENT_POINTS, EGFR_TIERS, RENAL_MAX};
use crate::ScoreCategory;

/// eGFR tier plus an additive dialysis penalty.
pub struct RenalFunction;

impl ScoreCategory for RenalFunction {
    fn id(&self) -> &str {
        "renal"
    }

    fn name(&self) -> &str {
        "Renal Status"
    }

    fn max_score(&self) -> u32 {
        RENAL_MAX
    }

    fn raw_score(&self, input: &AssessmentInput) -> u32 {
        let r = input.renal();
        let dialysis = if r.dialysis_dependent {
            DIALYSIS_DEPENDENT_POINTS
        } else {
            0
        };
        points_below(r.egfr, &EGFR_TIERS) + dialysis
    }
}
