use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::summary::ClinicalSummary;

/// Output of one engine run. Identical input always yields an identical
/// result; nothing here is recomputed after it is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub total_score: u32,
    pub risk_category: RiskCategory,
    /// Percent.
    pub limb_salvage_probability: u8,
    pub recommended_intervention: String,
    pub breakdown: Vec<CategoryScore>,
    pub recommendations: Vec<String>,
    pub monitoring_plan: MonitoringPlan,
    pub clinical_summary: ClinicalSummary,
    /// Version of the weight tables that produced this result.
    pub rule_version: String,
}

/// One category's contribution to `total_score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryScore {
    pub category: String,
    pub score: u32,
    pub max_score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk – Limb Salvage Likely",
            Self::Moderate => "Moderate Risk – Limb Salvage Possible",
            Self::High => "High Risk – Consider Amputation",
            Self::Critical => "Critical – Amputation Recommended",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonitoringPlan {
    pub follow_up_frequency: FollowUpFrequency,
    pub required_consults: Vec<Consult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FollowUpFrequency {
    Daily,
    EveryTwoToThreeDays,
    Weekly,
    BiWeekly,
}

impl FollowUpFrequency {
    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::EveryTwoToThreeDays => "Every 2–3 days",
            Self::Weekly => "Weekly",
            Self::BiWeekly => "Bi-weekly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Consult {
    VascularSurgery,
    InfectiousDisease,
    Nephrology,
    Endocrinology,
}

impl Consult {
    pub fn label(self) -> &'static str {
        match self {
            Self::VascularSurgery => "Vascular Surgery",
            Self::InfectiousDisease => "Infectious Disease",
            Self::Nephrology => "Nephrology",
            Self::Endocrinology => "Endocrinology",
        }
    }
}
