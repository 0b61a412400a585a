//! Weight tables and thresholds.
//!
//! This is the single source of every number the engine uses. Tiered
//! tables are ordered most severe first and award the first matching tier
//! only.

use serde::Serialize;
use ts_rs::TS;

use salvage_core::models::grades::{TexasGrade, TexasStage, WagnerGrade};
use salvage_core::models::result::{Consult, FollowUpFrequency, RiskCategory};
use salvage_core::models::summary::{
    AbiCategory, CkdStage, OsteomyelitisLikelihood, SepsisLikelihood,
};

/// One rung of a tiered table: `points` are awarded when the measured value
/// crosses `bound`. Whether "crosses" means above or below depends on the
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Tier {
    pub bound: f64,
    pub points: u32,
}

const fn tier(bound: f64, points: u32) -> Tier {
    Tier { bound, points }
}

/// Points of the first tier whose bound `value` strictly exceeds.
pub fn points_above(value: f64, tiers: &[Tier]) -> u32 {
    tiers
        .iter()
        .find(|t| value > t.bound)
        .map_or(0, |t| t.points)
}

/// Points of the first tier whose bound `value` falls strictly below.
pub fn points_below(value: f64, tiers: &[Tier]) -> u32 {
    tiers
        .iter()
        .find(|t| value < t.bound)
        .map_or(0, |t| t.points)
}

// Demographics & history
pub const DEMOGRAPHICS_MAX: u32 = 55;
pub const AGE_TIERS: [Tier; 3] = [tier(80.0, 20), tier(70.0, 15), tier(60.0, 10)];
pub const CURRENT_SMOKER_POINTS: u32 = 20;
pub const FORMER_SMOKER_POINTS: u32 = 10;
pub const DIABETES_DURATION_TIERS: [Tier; 2] = [tier(20.0, 15), tier(10.0, 10)];

// Wound morphology
pub const WAGNER_MAX: u32 = 50;
/// Indexed by Wagner grade.
pub const WAGNER_WEIGHTS: [u32; 6] = [0, 5, 10, 20, 30, 50];
pub const WIFI_MAX: u32 = 45;
pub const WIFI_MULTIPLIER: u32 = 5;

// Comorbidities
pub const COMORBIDITIES_MAX: u32 = 80;
pub const DIALYSIS_COMORBIDITY_POINTS: u32 = 15;
pub const CHF_POINTS: u32 = 10;
pub const CAD_POINTS: u32 = 8;
pub const PVD_POINTS: u32 = 10;
pub const PREVIOUS_AMPUTATION_POINTS: u32 = 15;
pub const HBA1C_TIERS: [Tier; 2] = [tier(10.0, 15), tier(8.0, 8)];

// Renal
pub const RENAL_MAX: u32 = 55;
pub const EGFR_TIERS: [Tier; 3] = [tier(15.0, 35), tier(30.0, 25), tier(60.0, 15)];
pub const DIALYSIS_DEPENDENT_POINTS: u32 = 20;

// Sepsis
pub const SEPSIS_MAX: u32 = 70;
pub const SIRS_POINTS_PER_CRITERION: u32 = 5;
pub const SIRS_POINTS_CAP: u32 = 20;
pub const ALTERED_MENTATION_POINTS: u32 = 10;
pub const HYPOTENSION_POINTS: u32 = 10;
pub const CREPITUS_POINTS: u32 = 20;
pub const CRP_POINTS: u32 = 15;
pub const CRP_THRESHOLD: f64 = 100.0;

// Arterial
pub const ARTERIAL_MAX: u32 = 60;
pub const ARTERIAL_ABI_TIERS: [Tier; 3] = [tier(0.4, 40), tier(0.6, 25), tier(0.8, 15)];
pub const ABSENT_WAVEFORM_POINTS: u32 = 20;
pub const MONOPHASIC_WAVEFORM_POINTS: u32 = 10;

// Osteomyelitis contribution
pub const OSTEOMYELITIS_MAX: u32 = 50;
pub const OSTEO_PROBE_TO_BONE_POINTS: u32 = 15;
pub const OSTEO_VISIBLE_BONE_POINTS: u32 = 20;
pub const OSTEO_XRAY_DEFINITE_POINTS: u32 = 15;
pub const OSTEO_MRI_POSITIVE_POINTS: u32 = 20;
pub const OSTEO_BIOPSY_POSITIVE_POINTS: u32 = 25;

// SIRS criteria
pub const SIRS_TEMP_HIGH: f64 = 38.0;
pub const SIRS_TEMP_LOW: f64 = 36.0;
pub const SIRS_HEART_RATE: f64 = 90.0;
pub const SIRS_RESPIRATORY_RATE: f64 = 20.0;
pub const SIRS_WBC_HIGH: f64 = 12.0;
pub const SIRS_WBC_LOW: f64 = 4.0;

// qSOFA criteria
pub const QSOFA_SYSTOLIC_BP: f64 = 100.0;
pub const QSOFA_RESPIRATORY_RATE: f64 = 22.0;

/// eGFR lower bounds for CKD stages 1–4; anything below the last is stage 5.
pub const CKD_STAGE_BOUNDS: [f64; 4] = [90.0, 60.0, 30.0, 15.0];

// ABI interpretation
pub const ABI_NON_COMPRESSIBLE: f64 = 1.3;
pub const ABI_NORMAL: f64 = 0.9;
pub const ABI_MILD_PAD: f64 = 0.7;
pub const ABI_MODERATE_PAD: f64 = 0.5;

// Osteomyelitis likelihood (independent of the contribution weights)
pub const LIKELIHOOD_PROBE_TO_BONE: u32 = 3;
pub const LIKELIHOOD_VISIBLE_BONE: u32 = 4;
pub const LIKELIHOOD_SAUSAGE_TOE: u32 = 2;
pub const LIKELIHOOD_XRAY_SUSPICIOUS: u32 = 1;
pub const LIKELIHOOD_XRAY_DEFINITE: u32 = 3;
pub const LIKELIHOOD_MRI_SUSPICIOUS: u32 = 2;
pub const LIKELIHOOD_MRI_POSITIVE: u32 = 4;
pub const LIKELIHOOD_ESR_TIERS: [Tier; 2] = [tier(70.0, 2), tier(40.0, 1)];
pub const LIKELIHOOD_ULCER_WEEKS: f64 = 6.0;
pub const LIKELIHOOD_ULCER_POINTS: u32 = 2;
pub const LIKELIHOOD_PROBABLE: u32 = 8;
pub const LIKELIHOOD_POSSIBLE: u32 = 4;

/// Minimum total score of each tier above Low, most severe first.
pub const RISK_THRESHOLDS: [(u32, RiskCategory); 3] = [
    (200, RiskCategory::Critical),
    (100, RiskCategory::High),
    (50, RiskCategory::Moderate),
];

/// Minimum total score of each follow-up interval above bi-weekly, most
/// frequent first.
pub const FOLLOW_UP_THRESHOLDS: [(u32, FollowUpFrequency); 3] = [
    (200, FollowUpFrequency::Daily),
    (100, FollowUpFrequency::EveryTwoToThreeDays),
    (50, FollowUpFrequency::Weekly),
];

// Recommendation and consult triggers
pub const URGENT_VASCULAR_ABI: f64 = 0.5;
pub const VASCULAR_REFERRAL_ABI: f64 = 0.7;
pub const ENDOCRINOLOGY_HBA1C: f64 = 9.0;
pub const SEPSIS_DIRECTIVE_SIRS: u8 = 2;

/// Serializable view of the rule tables for display and audit.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RuleTables {
    pub rule_version: String,
    pub categories: Vec<CategoryLimit>,
    pub demographics: DemographicsWeights,
    pub wagner_weights: Vec<u32>,
    pub wagner_descriptions: Vec<String>,
    pub wifi_multiplier: u32,
    pub texas_labels: Vec<TexasLabel>,
    pub comorbidities: ComorbidityWeights,
    pub renal: RenalWeights,
    pub sepsis: SepsisWeights,
    pub arterial: ArterialWeights,
    pub osteomyelitis: OsteomyelitisWeights,
    pub sirs: SirsCriteria,
    pub qsofa: QsofaCriteria,
    pub ckd_stages: Vec<CkdStageBand>,
    pub abi_bands: Vec<AbiBand>,
    pub sepsis_likelihoods: Vec<SepsisLikelihoodLabel>,
    pub osteomyelitis_likelihood: OsteomyelitisLikelihoodWeights,
    pub risk_tiers: Vec<RiskTier>,
    pub follow_up: Vec<FollowUpTier>,
    pub triggers: Triggers,
    pub consults: Vec<ConsultLabel>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct CategoryLimit {
    pub id: String,
    pub name: String,
    pub max_score: u32,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct DemographicsWeights {
    pub age_tiers: Vec<Tier>,
    pub current_smoker_points: u32,
    pub former_smoker_points: u32,
    pub diabetes_duration_tiers: Vec<Tier>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct TexasLabel {
    #[ts(type = "number")]
    pub grade: TexasGrade,
    pub stage: TexasStage,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ComorbidityWeights {
    pub dialysis_points: u32,
    pub chf_points: u32,
    pub cad_points: u32,
    pub pvd_points: u32,
    pub previous_amputation_points: u32,
    pub hba1c_tiers: Vec<Tier>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RenalWeights {
    pub egfr_tiers: Vec<Tier>,
    pub dialysis_dependent_points: u32,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SepsisWeights {
    pub sirs_points_per_criterion: u32,
    pub sirs_points_cap: u32,
    pub altered_mentation_points: u32,
    pub hypotension_points: u32,
    pub crepitus_points: u32,
    pub crp_points: u32,
    pub crp_threshold: f64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ArterialWeights {
    pub abi_tiers: Vec<Tier>,
    pub absent_waveform_points: u32,
    pub monophasic_waveform_points: u32,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct OsteomyelitisWeights {
    pub probe_to_bone_points: u32,
    pub visible_bone_points: u32,
    pub xray_definite_points: u32,
    pub mri_positive_points: u32,
    pub biopsy_positive_points: u32,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SirsCriteria {
    pub temperature_high: f64,
    pub temperature_low: f64,
    pub heart_rate: f64,
    pub respiratory_rate: f64,
    pub wbc_high: f64,
    pub wbc_low: f64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct QsofaCriteria {
    pub systolic_bp: f64,
    pub respiratory_rate: f64,
}

/// A CKD stage and the lowest eGFR it covers. Stage 5 has no lower bound.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct CkdStageBand {
    pub stage: CkdStage,
    pub min_egfr: Option<f64>,
    pub label: String,
}

/// An ABI category and the lowest ABI it covers. Non-compressible starts
/// strictly above its bound; severe CLI has no lower bound.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct AbiBand {
    pub category: AbiCategory,
    pub min_abi: Option<f64>,
    pub label: String,
    pub advice: Option<String>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SepsisLikelihoodLabel {
    pub likelihood: SepsisLikelihood,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct OsteomyelitisLikelihoodLabel {
    pub likelihood: OsteomyelitisLikelihood,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct OsteomyelitisLikelihoodWeights {
    pub probe_to_bone: u32,
    pub visible_bone: u32,
    pub sausage_toe: u32,
    pub xray_suspicious: u32,
    pub xray_definite: u32,
    pub mri_suspicious: u32,
    pub mri_positive: u32,
    pub esr_tiers: Vec<Tier>,
    pub ulcer_weeks: f64,
    pub ulcer_points: u32,
    pub probable_score: u32,
    pub possible_score: u32,
    pub labels: Vec<OsteomyelitisLikelihoodLabel>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RiskTier {
    pub min_score: u32,
    pub category: RiskCategory,
    pub label: String,
    pub limb_salvage_probability: u8,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct FollowUpTier {
    pub min_score: u32,
    pub frequency: FollowUpFrequency,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Triggers {
    pub urgent_vascular_abi: f64,
    pub vascular_referral_abi: f64,
    pub endocrinology_hba1c: f64,
    pub sepsis_directive_sirs: u8,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ConsultLabel {
    pub consult: Consult,
    pub label: String,
}

/// Snapshot of every table the current rule version scores with.
pub fn rule_tables() -> RuleTables {
    let categories = crate::all_categories()
        .iter()
        .map(|c| CategoryLimit {
            id: c.id().to_string(),
            name: c.name().to_string(),
            max_score: c.max_score(),
        })
        .collect();

    let mut risk_tiers: Vec<RiskTier> = RISK_THRESHOLDS
        .iter()
        .rev()
        .map(|&(min_score, category)| risk_tier(min_score, category))
        .collect();
    risk_tiers.insert(0, risk_tier(0, RiskCategory::Low));

    let mut follow_up: Vec<FollowUpTier> = FOLLOW_UP_THRESHOLDS
        .iter()
        .rev()
        .map(|&(min_score, frequency)| follow_up_tier(min_score, frequency))
        .collect();
    follow_up.insert(0, follow_up_tier(0, FollowUpFrequency::BiWeekly));

    let texas_labels = TexasGrade::ALL
        .iter()
        .flat_map(|&grade| {
            [TexasStage::A, TexasStage::B, TexasStage::C, TexasStage::D]
                .into_iter()
                .map(move |stage| TexasLabel {
                    grade,
                    stage,
                    label: crate::classification::texas_label(grade, stage),
                })
        })
        .collect();

    let ckd_stages = [
        CkdStage::Stage1,
        CkdStage::Stage2,
        CkdStage::Stage3,
        CkdStage::Stage4,
        CkdStage::Stage5,
    ]
    .into_iter()
    .enumerate()
    .map(|(i, stage)| CkdStageBand {
        stage,
        min_egfr: CKD_STAGE_BOUNDS.get(i).copied(),
        label: stage.label().to_string(),
    })
    .collect();

    let abi_bands = [
        (AbiCategory::NonCompressible, Some(ABI_NON_COMPRESSIBLE)),
        (AbiCategory::Normal, Some(ABI_NORMAL)),
        (AbiCategory::MildPad, Some(ABI_MILD_PAD)),
        (AbiCategory::ModeratePad, Some(ABI_MODERATE_PAD)),
        (AbiCategory::SevereCli, None),
    ]
    .into_iter()
    .map(|(category, min_abi)| AbiBand {
        category,
        min_abi,
        label: category.label().to_string(),
        advice: category.advice().map(str::to_string),
    })
    .collect();

    let sepsis_likelihoods = [
        SepsisLikelihood::Unlikely,
        SepsisLikelihood::Possible,
        SepsisLikelihood::Probable,
        SepsisLikelihood::Definite,
    ]
    .into_iter()
    .map(|likelihood| SepsisLikelihoodLabel {
        likelihood,
        label: likelihood.label().to_string(),
    })
    .collect();

    let osteomyelitis_labels = [
        OsteomyelitisLikelihood::Unlikely,
        OsteomyelitisLikelihood::Possible,
        OsteomyelitisLikelihood::Probable,
        OsteomyelitisLikelihood::Confirmed,
    ]
    .into_iter()
    .map(|likelihood| OsteomyelitisLikelihoodLabel {
        likelihood,
        label: likelihood.label().to_string(),
    })
    .collect();

    let consults = [
        Consult::VascularSurgery,
        Consult::InfectiousDisease,
        Consult::Nephrology,
        Consult::Endocrinology,
    ]
    .into_iter()
    .map(|consult| ConsultLabel {
        consult,
        label: consult.label().to_string(),
    })
    .collect();

    RuleTables {
        rule_version: crate::RULE_VERSION.to_string(),
        categories,
        demographics: DemographicsWeights {
            age_tiers: AGE_TIERS.to_vec(),
            current_smoker_points: CURRENT_SMOKER_POINTS,
            former_smoker_points: FORMER_SMOKER_POINTS,
            diabetes_duration_tiers: DIABETES_DURATION_TIERS.to_vec(),
        },
        wagner_weights: WAGNER_WEIGHTS.to_vec(),
        wagner_descriptions: WagnerGrade::ALL
            .iter()
            .map(|&g| crate::classification::wagner_description(g).to_string())
            .collect(),
        wifi_multiplier: WIFI_MULTIPLIER,
        texas_labels,
        comorbidities: ComorbidityWeights {
            dialysis_points: DIALYSIS_COMORBIDITY_POINTS,
            chf_points: CHF_POINTS,
            cad_points: CAD_POINTS,
            pvd_points: PVD_POINTS,
            previous_amputation_points: PREVIOUS_AMPUTATION_POINTS,
            hba1c_tiers: HBA1C_TIERS.to_vec(),
        },
        renal: RenalWeights {
            egfr_tiers: EGFR_TIERS.to_vec(),
            dialysis_dependent_points: DIALYSIS_DEPENDENT_POINTS,
        },
        sepsis: SepsisWeights {
            sirs_points_per_criterion: SIRS_POINTS_PER_CRITERION,
            sirs_points_cap: SIRS_POINTS_CAP,
            altered_mentation_points: ALTERED_MENTATION_POINTS,
            hypotension_points: HYPOTENSION_POINTS,
            crepitus_points: CREPITUS_POINTS,
            crp_points: CRP_POINTS,
            crp_threshold: CRP_THRESHOLD,
        },
        arterial: ArterialWeights {
            abi_tiers: ARTERIAL_ABI_TIERS.to_vec(),
            absent_waveform_points: ABSENT_WAVEFORM_POINTS,
            monophasic_waveform_points: MONOPHASIC_WAVEFORM_POINTS,
        },
        osteomyelitis: OsteomyelitisWeights {
            probe_to_bone_points: OSTEO_PROBE_TO_BONE_POINTS,
            visible_bone_points: OSTEO_VISIBLE_BONE_POINTS,
            xray_definite_points: OSTEO_XRAY_DEFINITE_POINTS,
            mri_positive_points: OSTEO_MRI_POSITIVE_POINTS,
            biopsy_positive_points: OSTEO_BIOPSY_POSITIVE_POINTS,
        },
        sirs: SirsCriteria {
            temperature_high: SIRS_TEMP_HIGH,
            temperature_low: SIRS_TEMP_LOW,
            heart_rate: SIRS_HEART_RATE,
            respiratory_rate: SIRS_RESPIRATORY_RATE,
            wbc_high: SIRS_WBC_HIGH,
            wbc_low: SIRS_WBC_LOW,
        },
        qsofa: QsofaCriteria {
            systolic_bp: QSOFA_SYSTOLIC_BP,
            respiratory_rate: QSOFA_RESPIRATORY_RATE,
        },
        ckd_stages,
        abi_bands,
        sepsis_likelihoods,
        osteomyelitis_likelihood: OsteomyelitisLikelihoodWeights {
            probe_to_bone: LIKELIHOOD_PROBE_TO_BONE,
            visible_bone: LIKELIHOOD_VISIBLE_BONE,
            sausage_toe: LIKELIHOOD_SAUSAGE_TOE,
            xray_suspicious: LIKELIHOOD_XRAY_SUSPICIOUS,
            xray_definite: LIKELIHOOD_XRAY_DEFINITE,
            mri_suspicious: LIKELIHOOD_MRI_SUSPICIOUS,
            mri_positive: LIKELIHOOD_MRI_POSITIVE,
            esr_tiers: LIKELIHOOD_ESR_TIERS.to_vec(),
            ulcer_weeks: LIKELIHOOD_ULCER_WEEKS,
            ulcer_points: LIKELIHOOD_ULCER_POINTS,
            probable_score: LIKELIHOOD_PROBABLE,
            possible_score: LIKELIHOOD_POSSIBLE,
            labels: osteomyelitis_labels,
        },
        risk_tiers,
        follow_up,
        triggers: Triggers {
            urgent_vascular_abi: URGENT_VASCULAR_ABI,
            vascular_referral_abi: VASCULAR_REFERRAL_ABI,
            endocrinology_hba1c: ENDOCRINOLOGY_HBA1C,
            sepsis_directive_sirs: SEPSIS_DIRECTIVE_SIRS,
        },
        consults,
    }
}

fn risk_tier(min_score: u32, category: RiskCategory) -> RiskTier {
    RiskTier {
        min_score,
        category,
        label: category.label().to_string(),
        limb_salvage_probability: crate::categorizer::limb_salvage_probability(category),
    }
}

fn follow_up_tier(min_score: u32, frequency: FollowUpFrequency) -> FollowUpTier {
    FollowUpTier {
        min_score,
        frequency,
        label: frequency.label().to_string(),
    }
}
