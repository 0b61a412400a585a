use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VascularFindings {
    pub abi_right: f64,
    pub abi_left: f64,
    pub affected_side: AffectedSide,
    /// Toe systolic pressure, mmHg.
    pub toe_pressure: f64,
    pub waveform_type: WaveformType,
    pub dorsalis_pedis_pulse: PulseQuality,
    pub posterior_tibial_pulse: PulseQuality,
    pub popliteal_pulse: PulseQuality,
    pub stenosis: StenosisGrade,
    /// Medial arterial calcification on imaging.
    pub calcification: bool,
    pub venous_insufficiency: bool,
    pub varicose_veins: bool,
    pub dvt_history: bool,
}

impl VascularFindings {
    /// ABI of the limb carrying the wound. Bilateral disease is judged by
    /// the worse (lower) side.
    pub fn affected_abi(&self) -> f64 {
        match self.affected_side {
            AffectedSide::Left => self.abi_left,
            AffectedSide::Right => self.abi_right,
            AffectedSide::Bilateral => self.abi_left.min(self.abi_right),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AffectedSide {
    Left,
    Right,
    Bilateral,
}

/// Doppler waveform, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WaveformType {
    Triphasic,
    Biphasic,
    Monophasic,
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PulseQuality {
    Normal,
    Diminished,
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StenosisGrade {
    None,
    Mild,
    Moderate,
    Severe,
    Occluded,
}
