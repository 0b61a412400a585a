//! Wound classification calculators: Wagner, University of Texas, WIfI and
//! SINBAD. Each reads only the grades the clinician selected.

use salvage_core::models::grades::{TexasGrade, TexasStage, WagnerGrade};
use salvage_core::models::wound::{SinbadFindings, WoundClassification};

use crate::tables::{WAGNER_WEIGHTS, WIFI_MULTIPLIER};

/// Wagner contribution to the composite score.
pub fn wagner_points(grade: WagnerGrade) -> u32 {
    WAGNER_WEIGHTS[usize::from(grade.value())]
}

pub fn wagner_description(grade: WagnerGrade) -> &'static str {
    match grade {
        WagnerGrade::Grade0 => "Grade 0 - Pre-ulcerative lesion, intact skin",
        WagnerGrade::Grade1 => "Grade 1 - Superficial ulcer",
        WagnerGrade::Grade2 => "Grade 2 - Deep ulcer to tendon, capsule or bone",
        WagnerGrade::Grade3 => "Grade 3 - Deep ulcer with abscess or osteomyelitis",
        WagnerGrade::Grade4 => "Grade 4 - Localized forefoot or heel gangrene",
        WagnerGrade::Grade5 => "Grade 5 - Extensive gangrene of the whole foot",
    }
}

/// University of Texas classification, for display only.
pub fn texas_label(grade: TexasGrade, stage: TexasStage) -> String {
    let depth = match grade {
        TexasGrade::Grade0 => "pre- or post-ulcerative lesion",
        TexasGrade::Grade1 => "superficial wound",
        TexasGrade::Grade2 => "wound penetrating to tendon or capsule",
        TexasGrade::Grade3 => "wound penetrating to bone or joint",
    };
    let condition = match stage {
        TexasStage::A => "clean",
        TexasStage::B => "infected",
        TexasStage::C => "ischemic",
        TexasStage::D => "infected and ischemic",
    };
    format!("{}{:?}: {depth}, {condition}", grade.value(), stage)
}

/// Sum of the three WIfI axes, 0–9.
pub fn wifi_total(wound: &WoundClassification) -> u32 {
    [wound.wifi_wound, wound.wifi_ischemia, wound.wifi_infection]
        .iter()
        .map(|g| u32::from(g.value()))
        .sum()
}

/// WIfI contribution to the composite score.
pub fn wifi_points(wound: &WoundClassification) -> u32 {
    wifi_total(wound) * WIFI_MULTIPLIER
}

/// Number of positive SINBAD criteria, 0–6. Informational; not part of the
/// composite score.
pub fn sinbad_score(findings: &SinbadFindings) -> u8 {
    findings.flags().iter().filter(|&&f| f).count() as u8
}
