//! The frozen clinical snapshot handed to the engine.
//!
//! Sections arrive one at a time from the capture wizard and are collected
//! in an [`AssessmentInputBuilder`]. Only [`AssessmentInputBuilder::build`]
//! produces an [`AssessmentInput`], so the engine can never see a
//! half-filled form.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::comorbidities::Comorbidities;
use super::demographics::Demographics;
use super::grades::{OrdinalGrade, TexasGrade, TexasStage, WagnerGrade, WifiGrade};
use super::osteomyelitis::OsteomyelitisFindings;
use super::renal::RenalStatus;
use super::sepsis::SepsisVitals;
use super::vascular::VascularFindings;
use super::wound::{SinbadFindings, WoundClassification};
use crate::error::InvalidInputError;

/// A complete, validated assessment. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(try_from = "AssessmentInputBuilder")]
#[ts(export)]
pub struct AssessmentInput {
    demographics: Demographics,
    wound: WoundClassification,
    comorbidities: Comorbidities,
    renal: RenalStatus,
    sepsis: SepsisVitals,
    vascular: VascularFindings,
    osteomyelitis: OsteomyelitisFindings,
}

impl AssessmentInput {
    pub fn builder() -> AssessmentInputBuilder {
        AssessmentInputBuilder::default()
    }

    /// Parse and validate a full snapshot submitted as JSON.
    pub fn from_json(value: serde_json::Value) -> Result<Self, InvalidInputError> {
        let raw: RawSnapshot = serde_json::from_value(value)?;
        AssessmentInputBuilder::try_from(raw)?.build()
    }

    /// Reopen this snapshot for editing. The original is untouched.
    pub fn to_builder(&self) -> AssessmentInputBuilder {
        AssessmentInputBuilder::from(self.clone())
    }

    pub fn demographics(&self) -> &Demographics {
        &self.demographics
    }

    pub fn wound(&self) -> &WoundClassification {
        &self.wound
    }

    pub fn comorbidities(&self) -> &Comorbidities {
        &self.comorbidities
    }

    pub fn renal(&self) -> &RenalStatus {
        &self.renal
    }

    pub fn sepsis(&self) -> &SepsisVitals {
        &self.sepsis
    }

    pub fn vascular(&self) -> &VascularFindings {
        &self.vascular
    }

    pub fn osteomyelitis(&self) -> &OsteomyelitisFindings {
        &self.osteomyelitis
    }
}

/// Collects assessment sections in any order. Setting a section twice keeps
/// the last value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "RawSnapshot")]
pub struct AssessmentInputBuilder {
    demographics: Option<Demographics>,
    wound: Option<WoundClassification>,
    comorbidities: Option<Comorbidities>,
    renal: Option<RenalStatus>,
    sepsis: Option<SepsisVitals>,
    vascular: Option<VascularFindings>,
    osteomyelitis: Option<OsteomyelitisFindings>,
}

impl AssessmentInputBuilder {
    pub fn demographics(mut self, section: Demographics) -> Self {
        self.demographics = Some(section);
        self
    }

    pub fn wound(mut self, section: WoundClassification) -> Self {
        self.wound = Some(section);
        self
    }

    pub fn comorbidities(mut self, section: Comorbidities) -> Self {
        self.comorbidities = Some(section);
        self
    }

    pub fn renal(mut self, section: RenalStatus) -> Self {
        self.renal = Some(section);
        self
    }

    pub fn sepsis(mut self, section: SepsisVitals) -> Self {
        self.sepsis = Some(section);
        self
    }

    pub fn vascular(mut self, section: VascularFindings) -> Self {
        self.vascular = Some(section);
        self
    }

    pub fn osteomyelitis(mut self, section: OsteomyelitisFindings) -> Self {
        self.osteomyelitis = Some(section);
        self
    }

    /// Names of the sections still missing, in wizard order.
    pub fn missing_sections(&self) -> Vec<&'static str> {
        [
            ("demographics", self.demographics.is_none()),
            ("wound", self.wound.is_none()),
            ("comorbidities", self.comorbidities.is_none()),
            ("renal", self.renal.is_none()),
            ("sepsis", self.sepsis.is_none()),
            ("vascular", self.vascular.is_none()),
            ("osteomyelitis", self.osteomyelitis.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }

    /// Validate and freeze. Fails on the first missing section or
    /// non-finite measurement; never returns a partial snapshot.
    pub fn build(self) -> Result<AssessmentInput, InvalidInputError> {
        let input = AssessmentInput {
            demographics: self
                .demographics
                .ok_or(InvalidInputError::MissingSection("demographics"))?,
            wound: self.wound.ok_or(InvalidInputError::MissingSection("wound"))?,
            comorbidities: self
                .comorbidities
                .ok_or(InvalidInputError::MissingSection("comorbidities"))?,
            renal: self.renal.ok_or(InvalidInputError::MissingSection("renal"))?,
            sepsis: self
                .sepsis
                .ok_or(InvalidInputError::MissingSection("sepsis"))?,
            vascular: self
                .vascular
                .ok_or(InvalidInputError::MissingSection("vascular"))?,
            osteomyelitis: self
                .osteomyelitis
                .ok_or(InvalidInputError::MissingSection("osteomyelitis"))?,
        };

        for (field, value) in measurements(&input) {
            if !value.is_finite() {
                return Err(InvalidInputError::NonFinite { field, value });
            }
        }

        Ok(input)
    }
}

impl From<AssessmentInput> for AssessmentInputBuilder {
    fn from(input: AssessmentInput) -> Self {
        Self {
            demographics: Some(input.demographics),
            wound: Some(input.wound),
            comorbidities: Some(input.comorbidities),
            renal: Some(input.renal),
            sepsis: Some(input.sepsis),
            vascular: Some(input.vascular),
            osteomyelitis: Some(input.osteomyelitis),
        }
    }
}

impl TryFrom<AssessmentInputBuilder> for AssessmentInput {
    type Error = InvalidInputError;

    fn try_from(builder: AssessmentInputBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

fn measurements(input: &AssessmentInput) -> [(&'static str, f64); 18] {
    let d = &input.demographics;
    let c = &input.comorbidities;
    let r = &input.renal;
    let s = &input.sepsis;
    let v = &input.vascular;
    let o = &input.osteomyelitis;
    [
        ("demographics.diabetes_duration", d.diabetes_duration),
        ("comorbidities.hba1c", c.hba1c),
        ("renal.creatinine", r.creatinine),
        ("renal.bun", r.bun),
        ("renal.egfr", r.egfr),
        ("sepsis.temperature", s.temperature),
        ("sepsis.heart_rate", s.heart_rate),
        ("sepsis.respiratory_rate", s.respiratory_rate),
        ("sepsis.wbc", s.wbc),
        ("sepsis.systolic_bp", s.systolic_bp),
        ("sepsis.crp", s.crp),
        ("sepsis.procalcitonin", s.procalcitonin),
        ("sepsis.lactate", s.lactate),
        ("vascular.abi_right", v.abi_right),
        ("vascular.abi_left", v.abi_left),
        ("vascular.toe_pressure", v.toe_pressure),
        ("osteomyelitis.esr", o.esr),
        ("osteomyelitis.ulcer_duration", o.ulcer_duration),
    ]
}

/// Snapshot as it arrives on the wire. Grades are kept as plain integers
/// so that an off-scale grade surfaces as [`InvalidInputError::OutOfRange`]
/// instead of a parse failure.
#[derive(Deserialize)]
struct RawSnapshot {
    demographics: Option<Demographics>,
    wound: Option<RawWound>,
    comorbidities: Option<Comorbidities>,
    renal: Option<RenalStatus>,
    sepsis: Option<SepsisVitals>,
    vascular: Option<VascularFindings>,
    osteomyelitis: Option<OsteomyelitisFindings>,
}

#[derive(Deserialize)]
struct RawWound {
    wagner_grade: i64,
    texas_grade: i64,
    texas_stage: TexasStage,
    wifi_wound: i64,
    wifi_ischemia: i64,
    wifi_infection: i64,
    sinbad: SinbadFindings,
}

impl TryFrom<RawWound> for WoundClassification {
    type Error = InvalidInputError;

    fn try_from(raw: RawWound) -> Result<Self, Self::Error> {
        Ok(Self {
            wagner_grade: WagnerGrade::from_raw("wound.wagner_grade", raw.wagner_grade)?,
            texas_grade: TexasGrade::from_raw("wound.texas_grade", raw.texas_grade)?,
            texas_stage: raw.texas_stage,
            wifi_wound: WifiGrade::from_raw("wound.wifi_wound", raw.wifi_wound)?,
            wifi_ischemia: WifiGrade::from_raw("wound.wifi_ischemia", raw.wifi_ischemia)?,
            wifi_infection: WifiGrade::from_raw("wound.wifi_infection", raw.wifi_infection)?,
            sinbad: raw.sinbad,
        })
    }
}

impl TryFrom<RawSnapshot> for AssessmentInputBuilder {
    type Error = InvalidInputError;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        Ok(Self {
            demographics: raw.demographics,
            wound: raw.wound.map(WoundClassification::try_from).transpose()?,
            comorbidities: raw.comorbidities,
            renal: raw.renal,
            sepsis: raw.sepsis,
            vascular: raw.vascular,
            osteomyelitis: raw.osteomyelitis,
        })
    }
}
