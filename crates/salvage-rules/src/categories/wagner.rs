use salvage_core::models::input::AssessmentInput;

use crate::classification::wagner_points;
use crate::tables::WAGNER_MAX;
use crate::ScoreCategory;

/// Wound morphology, looked up from the Wagner weight table.
pub struct WagnerContribution;

impl ScoreCategory for WagnerContribution {
    fn id(&self) -> &str {
        "wagner"
    }

    fn name(&self) -> &str {
        "Wagner Classification"
    }

    fn max_score(&self) -> u32 {
        WAGNER_MAX
    }

    fn raw_score(&self, input: &AssessmentInput) -> u32 {
        wagner_points(input.wound().wagner_grade)
    }
}
