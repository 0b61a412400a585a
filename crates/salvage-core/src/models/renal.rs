use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RenalStatus {
    /// Serum creatinine, mg/dL.
    pub creatinine: f64,
    /// Blood urea nitrogen, mg/dL.
    pub bun: f64,
    /// Estimated GFR, mL/min/1.73m².
    pub egfr: f64,
    pub dialysis_dependent: bool,
    #[serde(default)]
    pub dialysis_type: Option<DialysisType>,
    /// Months on dialysis.
    #[serde(default)]
    pub dialysis_vintage: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DialysisType {
    Hemodialysis,
    PeritonealDialysis,
}
