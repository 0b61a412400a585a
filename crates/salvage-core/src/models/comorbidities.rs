use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Comorbidities {
    pub hypertension: bool,
    pub dyslipidemia: bool,
    pub coronary_artery_disease: bool,
    pub congestive_heart_failure: bool,
    pub peripheral_vascular_disease: bool,
    pub previous_amputation: bool,
    pub previous_ulceration: bool,
    pub stroke: bool,
    pub chronic_kidney_disease: bool,
    pub dialysis: bool,
    pub retinopathy: bool,
    pub peripheral_neuropathy: bool,
    pub charcot_foot: bool,
    pub obesity: bool,
    pub copd: bool,
    pub immunosuppression: bool,
    pub liver_disease: bool,
    /// Glycated haemoglobin, percent.
    pub hba1c: f64,
    pub blood_sugar_control: BloodSugarControl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BloodSugarControl {
    Good,
    Moderate,
    Poor,
}
