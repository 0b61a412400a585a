//! Derived clinical sub-scores and classifications shown alongside the
//! composite score. None of these values feed `total_score` directly.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::grades::{TexasGrade, TexasStage, WagnerGrade, WifiGrade};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalSummary {
    #[ts(type = "number")]
    pub wagner_grade: WagnerGrade,
    #[ts(type = "number")]
    pub texas_grade: TexasGrade,
    pub texas_stage: TexasStage,
    pub texas_label: String,
    #[ts(type = "number")]
    pub wifi_wound: WifiGrade,
    #[ts(type = "number")]
    pub wifi_ischemia: WifiGrade,
    #[ts(type = "number")]
    pub wifi_infection: WifiGrade,
    /// 0–6, informational only.
    pub sinbad_score: u8,
    pub ckd_stage: CkdStage,
    pub sirs_score: u8,
    pub qsofa_score: u8,
    pub sepsis: SepsisAssessment,
    pub abi_left: AbiInterpretation,
    pub abi_right: AbiInterpretation,
    pub osteomyelitis: OsteomyelitisAssessment,
}

/// KDIGO-style CKD stage from eGFR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CkdStage {
    Stage1,
    Stage2,
    Stage3,
    Stage4,
    Stage5,
}

impl CkdStage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Stage1 => "Stage 1 - Normal or high GFR",
            Self::Stage2 => "Stage 2 - Mildly decreased GFR",
            Self::Stage3 => "Stage 3 - Moderately decreased GFR",
            Self::Stage4 => "Stage 4 - Severely decreased GFR",
            Self::Stage5 => "Stage 5 - Kidney failure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SepsisLikelihood {
    Unlikely,
    Possible,
    Probable,
    Definite,
}

impl SepsisLikelihood {
    pub fn label(self) -> &'static str {
        match self {
            Self::Unlikely => "Sepsis Unlikely",
            Self::Possible => "Possible Sepsis",
            Self::Probable => "Probable Sepsis",
            Self::Definite => "Definite Sepsis",
        }
    }

    /// Probable and definite sepsis need same-day escalation.
    pub fn is_urgent(self) -> bool {
        matches!(self, Self::Probable | Self::Definite)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SepsisAssessment {
    pub likelihood: SepsisLikelihood,
    pub urgent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AbiCategory {
    NonCompressible,
    Normal,
    MildPad,
    ModeratePad,
    SevereCli,
}

impl AbiCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::NonCompressible => "Non-compressible vessels",
            Self::Normal => "Normal",
            Self::MildPad => "Mild PAD",
            Self::ModeratePad => "Moderate PAD",
            Self::SevereCli => "Severe PAD / Critical Limb Ischemia",
        }
    }

    pub fn advice(self) -> Option<&'static str> {
        match self {
            Self::NonCompressible => Some("ABI unreliable; obtain toe pressures"),
            Self::Normal | Self::MildPad => None,
            Self::ModeratePad => Some("Consider revascularization"),
            Self::SevereCli => Some("Urgent vascular consult"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AbiInterpretation {
    pub abi: f64,
    pub category: AbiCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OsteomyelitisLikelihood {
    Unlikely,
    Possible,
    Probable,
    Confirmed,
}

impl OsteomyelitisLikelihood {
    pub fn label(self) -> &'static str {
        match self {
            Self::Unlikely => "Osteomyelitis Unlikely",
            Self::Possible => "Possible Osteomyelitis",
            Self::Probable => "Probable Osteomyelitis",
            Self::Confirmed => "Confirmed Osteomyelitis",
        }
    }
}

/// Evidence-weighted likelihood. `score` is unclamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OsteomyelitisAssessment {
    pub score: u32,
    pub likelihood: OsteomyelitisLikelihood,
}
