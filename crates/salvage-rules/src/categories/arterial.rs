use salvage_core::models::input::AssessmentInput;
use salvage_core::models::vascular::WaveformType;

use crate::tables::{
    points_below, ABSENT_WAVEFORM_POINTS, ARTERIAL_ABI_TIERS, ARTERIAL_MAX,
    MONOPHASIC_WAVEFORM_POINTS,
};
use crate::ScoreCategory;

/// Perfusion of the affected limb: ABI tier plus Doppler waveform.
pub struct ArterialStatus;

impl ScoreCategory for ArterialStatus {
    fn id(&self) -> &str {
        "arterial"
    }

    fn name(&self) -> &str {
        "Arterial Status"
    }

    fn max_score(&self) -> u32 {
        ARTERIAL_MAX
    }

    fn raw_score(&self, input: &AssessmentInput) -> u32 {
        let v = input.vascular();
        let waveform = match v.waveform_type {
            WaveformType::Absent => ABSENT_WAVEFORM_POINTS,
            WaveformType::Monophasic => MONOPHASIC_WAVEFORM_POINTS,
            WaveformType::Biphasic | WaveformType::Triphasic => 0,
        };
        points_below(v.affected_abi(), &ARTERIAL_ABI_TIERS) + waveform
    }
}
