use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::grades::{TexasGrade, TexasStage, WagnerGrade, WifiGrade};

/// Wound classification as selected by the clinician. Nothing here is
/// derived; the engine reads these grades as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WoundClassification {
    #[ts(type = "number")]
    pub wagner_grade: WagnerGrade,
    #[ts(type = "number")]
    pub texas_grade: TexasGrade,
    pub texas_stage: TexasStage,
    #[ts(type = "number")]
    pub wifi_wound: WifiGrade,
    #[ts(type = "number")]
    pub wifi_ischemia: WifiGrade,
    #[ts(type = "number")]
    pub wifi_infection: WifiGrade,
    pub sinbad: SinbadFindings,
}

/// The six binary SINBAD criteria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SinbadFindings {
    /// Ulcer located on the midfoot or hindfoot rather than the forefoot.
    pub site_midfoot_or_hindfoot: bool,
    /// Pedal blood flow clinically impaired.
    pub ischemia: bool,
    /// Protective sensation lost.
    pub neuropathy: bool,
    pub bacterial_infection: bool,
    /// Ulcer area at least 1 cm².
    pub area_at_least_1cm2: bool,
    /// Ulcer reaches muscle, tendon or deeper.
    pub depth_to_tendon_or_bone: bool,
}

impl SinbadFindings {
    pub fn flags(&self) -> [bool; 6] {
        [
            self.site_midfoot_or_hindfoot,
            self.ischemia,
            self.neuropathy,
            self.bacterial_infection,
            self.area_at_least_1cm2,
            self.depth_to_tendon_or_bone,
        ]
    }
}
