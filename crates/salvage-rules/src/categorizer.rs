//! Maps a composite score to a risk tier, limb-salvage probability and
//! default intervention.

use salvage_core::models::grades::WagnerGrade;
use salvage_core::models::result::RiskCategory;

use crate::tables::RISK_THRESHOLDS;

/// Half-open thresholds: each tier includes its minimum and excludes the
/// next tier's minimum.
pub fn risk_category(total_score: u32) -> RiskCategory {
    RISK_THRESHOLDS
        .iter()
        .find(|(min, _)| total_score >= *min)
        .map_or(RiskCategory::Low, |&(_, category)| category)
}

/// Percent.
pub fn limb_salvage_probability(category: RiskCategory) -> u8 {
    match category {
        RiskCategory::Low => 90,
        RiskCategory::Moderate => 70,
        RiskCategory::High => 40,
        RiskCategory::Critical => 15,
    }
}

pub fn recommended_intervention(category: RiskCategory, wagner: WagnerGrade) -> &'static str {
    match category {
        RiskCategory::Low => "Conservative Management",
        RiskCategory::Moderate => "Wound Care & Debridement",
        RiskCategory::High if wagner >= WagnerGrade::Grade4 => "Ray/Transmetatarsal Amputation",
        RiskCategory::High => "Minor Amputation / Aggressive Surgical Debridement",
        RiskCategory::Critical if wagner == WagnerGrade::Grade5 => "Above-Knee Amputation",
        RiskCategory::Critical => "Below-Knee Amputation",
    }
}
