use salvage_core::models::demographics::SmokingStatus;
use salvage_core::models::input::AssessmentInput;

use crate::tables::{
    points_above, AGE_TIERS, CURRENT_SMOKER_POINTS, DEMOGRAPHICS_MAX, DIABETES_DURATION_TIERS,
    FORMER_SMOKER_POINTS,
};
use crate::ScoreCategory;

/// Age, smoking and diabetes duration. Each factor awards its highest
/// matching tier only.
pub struct DemographicsHistory;

impl ScoreCategory for DemographicsHistory {
    fn id(&self) -> &str {
        "demographics"
    }

    fn name(&self) -> &str {
        "Demographics & History"
    }

    fn max_score(&self) -> u32 {
        DEMOGRAPHICS_MAX
    }

    fn raw_score(&self, input: &AssessmentInput) -> u32 {
        let d = input.demographics();
        let smoking = match d.smoking_status {
            SmokingStatus::Current => CURRENT_SMOKER_POINTS,
            SmokingStatus::Former => FORMER_SMOKER_POINTS,
            SmokingStatus::Never => 0,
        };
        points_above(f64::from(d.age), &AGE_TIERS)
            + smoking
            + points_above(d.diabetes_duration, &DIABETES_DURATION_TIERS)
    }
}
