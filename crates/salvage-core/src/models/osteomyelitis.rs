use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OsteomyelitisFindings {
    pub probe_to_bone: bool,
    pub visible_bone: bool,
    pub sausage_toe: bool,
    pub xray_findings: XrayFindings,
    /// `None` when no MRI was performed.
    #[serde(default)]
    pub mri_finding: Option<MriFinding>,
    /// `None` when no bone biopsy was performed.
    #[serde(default)]
    pub bone_biopsy_result: Option<BiopsyResult>,
    /// Erythrocyte sedimentation rate, mm/h.
    pub esr: f64,
    /// Weeks the ulcer has been open.
    pub ulcer_duration: f64,
    pub previous_antibiotic_courses: u32,
}

impl OsteomyelitisFindings {
    pub fn mri_performed(&self) -> bool {
        self.mri_finding.is_some()
    }

    pub fn bone_biopsy_performed(&self) -> bool {
        self.bone_biopsy_result.is_some()
    }

    pub fn biopsy_positive(&self) -> bool {
        self.bone_biopsy_result == Some(BiopsyResult::Positive)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum XrayFindings {
    Normal,
    Suspicious,
    Definite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MriFinding {
    Negative,
    Suspicious,
    Positive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BiopsyResult {
    Negative,
    Positive,
    Pending,
}
