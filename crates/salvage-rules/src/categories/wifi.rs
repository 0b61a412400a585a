use salvage_core::models::input::AssessmentInput;

use crate::classification::wifi_points;
use crate::tables::WIFI_MAX;
use crate::ScoreCategory;

/// Perfusion and infection burden: `(W + I + fI) × 5`. Scored separately
/// from Wagner.
pub struct WifiContribution;

impl ScoreCategory for WifiContribution {
    fn id(&self) -> &str {
        "wifi"
    }

    fn name(&self) -> &str {
        "WIfI Classification"
    }

    fn max_score(&self) -> u32 {
        WIFI_MAX
    }

    fn raw_score(&self, input: &AssessmentInput) -> u32 {
        wifi_points(input.wound())
    }
}
