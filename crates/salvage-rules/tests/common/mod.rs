#![allow(dead_code)]

use salvage_core::models::comorbidities::{BloodSugarControl, Comorbidities};
use salvage_core::models::demographics::{
    AmbulatoryStatus, Demographics, DiabetesType, Gender, SmokingStatus,
};
use salvage_core::models::grades::{TexasGrade, TexasStage, WagnerGrade, WifiGrade};
use salvage_core::models::input::AssessmentInput;
use salvage_core::models::osteomyelitis::{OsteomyelitisFindings, XrayFindings};
use salvage_core::models::renal::RenalStatus;
use salvage_core::models::sepsis::SepsisVitals;
use salvage_core::models::vascular::{
    AffectedSide, PulseQuality, StenosisGrade, VascularFindings, WaveformType,
};
use salvage_core::models::wound::{SinbadFindings, WoundClassification};

pub fn demographics() -> Demographics {
    Demographics {
        age: 45,
        gender: Gender::Female,
        diabetes_type: DiabetesType::Type2,
        diabetes_duration: 5.0,
        smoking_status: SmokingStatus::Never,
        ambulatory_status: AmbulatoryStatus::Independent,
    }
}

pub fn wound() -> WoundClassification {
    WoundClassification {
        wagner_grade: WagnerGrade::Grade1,
        texas_grade: TexasGrade::Grade1,
        texas_stage: TexasStage::A,
        wifi_wound: WifiGrade::Grade0,
        wifi_ischemia: WifiGrade::Grade0,
        wifi_infection: WifiGrade::Grade0,
        sinbad: SinbadFindings::default(),
    }
}

pub fn comorbidities() -> Comorbidities {
    Comorbidities {
        hypertension: false,
        dyslipidemia: false,
        coronary_artery_disease: false,
        congestive_heart_failure: false,
        peripheral_vascular_disease: false,
        previous_amputation: false,
        previous_ulceration: false,
        stroke: false,
        chronic_kidney_disease: false,
        dialysis: false,
        retinopathy: false,
        peripheral_neuropathy: false,
        charcot_foot: false,
        obesity: false,
        copd: false,
        immunosuppression: false,
        liver_disease: false,
        hba1c: 6.5,
        blood_sugar_control: BloodSugarControl::Good,
    }
}

pub fn renal() -> RenalStatus {
    RenalStatus {
        creatinine: 0.9,
        bun: 14.0,
        egfr: 95.0,
        dialysis_dependent: false,
        dialysis_type: None,
        dialysis_vintage: None,
    }
}

pub fn sepsis() -> SepsisVitals {
    SepsisVitals {
        temperature: 37.0,
        heart_rate: 75.0,
        respiratory_rate: 16.0,
        wbc: 7.0,
        altered_mentation: false,
        systolic_bp: 125.0,
        crp: 5.0,
        procalcitonin: 0.05,
        lactate: 1.0,
        fever: false,
        cellulitis: false,
        lymphangitis: false,
        purulent_discharge: false,
        crepitus: false,
        foul_smell: false,
    }
}

pub fn vascular() -> VascularFindings {
    VascularFindings {
        abi_right: 1.05,
        abi_left: 1.05,
        affected_side: AffectedSide::Left,
        toe_pressure: 80.0,
        waveform_type: WaveformType::Triphasic,
        dorsalis_pedis_pulse: PulseQuality::Normal,
        posterior_tibial_pulse: PulseQuality::Normal,
        popliteal_pulse: PulseQuality::Normal,
        stenosis: StenosisGrade::None,
        calcification: false,
        venous_insufficiency: false,
        varicose_veins: false,
        dvt_history: false,
    }
}

pub fn osteomyelitis() -> OsteomyelitisFindings {
    OsteomyelitisFindings {
        probe_to_bone: false,
        visible_bone: false,
        sausage_toe: false,
        xray_findings: XrayFindings::Normal,
        mri_finding: None,
        bone_biopsy_result: None,
        esr: 15.0,
        ulcer_duration: 2.0,
        previous_antibiotic_courses: 0,
    }
}

/// A 45-year-old non-smoker with a superficial, clean, well-perfused ulcer.
pub fn low_risk_input() -> AssessmentInput {
    AssessmentInput::builder()
        .demographics(demographics())
        .wound(wound())
        .comorbidities(comorbidities())
        .renal(renal())
        .sepsis(sepsis())
        .vascular(vascular())
        .osteomyelitis(osteomyelitis())
        .build()
        .expect("baseline input is complete")
}
