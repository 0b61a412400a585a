use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Vital signs, inflammatory markers and local infection signs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SepsisVitals {
    /// Core temperature, °C.
    pub temperature: f64,
    /// Beats per minute.
    pub heart_rate: f64,
    /// Breaths per minute.
    pub respiratory_rate: f64,
    /// White cell count, ×10⁹/L.
    pub wbc: f64,
    pub altered_mentation: bool,
    /// Systolic blood pressure, mmHg.
    pub systolic_bp: f64,
    /// C-reactive protein, mg/L.
    pub crp: f64,
    /// ng/mL.
    pub procalcitonin: f64,
    /// mmol/L.
    pub lactate: f64,
    pub fever: bool,
    pub cellulitis: bool,
    pub lymphangitis: bool,
    pub purulent_discharge: bool,
    pub crepitus: bool,
    pub foul_smell: bool,
}
