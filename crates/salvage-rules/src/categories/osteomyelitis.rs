use salvage_core::models::input::AssessmentInput;
use salvage_core::models::osteomyelitis::{MriFinding, XrayFindings};

use crate::tables::*;
use crate::ScoreCategory;

/// Bone involvement. Weighted independently of the likelihood score in
/// `subscores::osteomyelitis_score`; the raw sum can reach 95 and is
/// clamped to 50.
pub struct OsteomyelitisContribution;

impl ScoreCategory for OsteomyelitisContribution {
    fn id(&self) -> &str {
        "osteomyelitis"
    }

    fn name(&self) -> &str {
        "Osteomyelitis"
    }

    fn max_score(&self) -> u32 {
        OSTEOMYELITIS_MAX
    }

    fn raw_score(&self, input: &AssessmentInput) -> u32 {
        let o = input.osteomyelitis();
        [
            (o.probe_to_bone, OSTEO_PROBE_TO_BONE_POINTS),
            (o.visible_bone, OSTEO_VISIBLE_BONE_POINTS),
            (
                o.xray_findings == XrayFindings::Definite,
                OSTEO_XRAY_DEFINITE_POINTS,
            ),
            (
                o.mri_finding == Some(MriFinding::Positive),
                OSTEO_MRI_POSITIVE_POINTS,
            ),
            (o.biopsy_positive(), OSTEO_BIOPSY_POSITIVE_POINTS),
        ]
        .into_iter()
        .filter_map(|(present, points)| present.then_some(points))
        .sum()
    }
}
