#![allow(dead_code)]

use serde_json::json;
use uuid::Uuid;

use salvage_core::models::input::AssessmentInput;
use salvage_core::models::stored::StoredAssessment;
use salvage_rules::{compute_assessment, RULE_VERSION};

pub fn sample_input() -> AssessmentInput {
    AssessmentInput::from_json(json!({
        "demographics": {
            "age": 72, "gender": "female", "diabetes_type": "type2",
            "diabetes_duration": 18.0, "smoking_status": "former",
            "ambulatory_status": "with_aid"
        },
        "wound": {
            "wagner_grade": 3, "texas_grade": 3, "texas_stage": "B",
            "wifi_wound": 2, "wifi_ischemia": 1, "wifi_infection": 2,
            "sinbad": {
                "site_midfoot_or_hindfoot": false, "ischemia": true, "neuropathy": true,
                "bacterial_infection": true, "area_at_least_1cm2": true,
                "depth_to_tendon_or_bone": true
            }
        },
        "comorbidities": {
            "hypertension": true, "dyslipidemia": true, "coronary_artery_disease": true,
            "congestive_heart_failure": false, "peripheral_vascular_disease": true,
            "previous_amputation": false, "previous_ulceration": true, "stroke": false,
            "chronic_kidney_disease": true, "dialysis": false, "retinopathy": true,
            "peripheral_neuropathy": true, "charcot_foot": false, "obesity": true,
            "copd": false, "immunosuppression": false, "liver_disease": false,
            "hba1c": 9.4, "blood_sugar_control": "poor"
        },
        "renal": {
            "creatinine": 1.8, "bun": 30.0, "egfr": 38.0, "dialysis_dependent": false
        },
        "sepsis": {
            "temperature": 38.4, "heart_rate": 98.0, "respiratory_rate": 19.0, "wbc": 13.5,
            "altered_mentation": false, "systolic_bp": 118.0, "crp": 86.0,
            "procalcitonin": 0.6, "lactate": 1.9, "fever": true, "cellulitis": true,
            "lymphangitis": false, "purulent_discharge": true, "crepitus": false,
            "foul_smell": true
        },
        "vascular": {
            "abi_right": 0.88, "abi_left": 0.62, "affected_side": "left",
            "toe_pressure": 42.0, "waveform_type": "monophasic",
            "dorsalis_pedis_pulse": "absent", "posterior_tibial_pulse": "diminished",
            "popliteal_pulse": "normal", "stenosis": "severe", "calcification": true,
            "venous_insufficiency": false, "varicose_veins": false, "dvt_history": false
        },
        "osteomyelitis": {
            "probe_to_bone": true, "visible_bone": false, "sausage_toe": false,
            "xray_findings": "suspicious", "mri_finding": "positive",
            "esr": 72.0, "ulcer_duration": 9.0, "previous_antibiotic_courses": 2
        }
    }))
    .expect("fixture is a complete snapshot")
}

pub fn stored(patient_id: Uuid, created_at: jiff::Timestamp) -> StoredAssessment {
    let input = sample_input();
    let result = compute_assessment(&input);
    StoredAssessment {
        assessment_id: Uuid::new_v4(),
        patient_id,
        rule_version: RULE_VERSION.to_string(),
        input,
        result,
        assessed_by: Some("dr.okafor".to_string()),
        created_at,
    }
}

pub fn at(seconds: i64) -> jiff::Timestamp {
    jiff::Timestamp::from_second(seconds).expect("valid timestamp")
}
