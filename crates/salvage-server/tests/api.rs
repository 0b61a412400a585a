use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use salvage_server::router;
use salvage_server::state::AppState;
use salvage_storage::MemoryStore;

fn app() -> Router {
    router(AppState::new(MemoryStore::new()))
}

fn snapshot() -> Value {
    json!({
        "demographics": {
            "age": 85, "gender": "male", "diabetes_type": "type2",
            "diabetes_duration": 8.0, "smoking_status": "current",
            "ambulatory_status": "wheelchair"
        },
        "wound": {
            "wagner_grade": 5, "texas_grade": 3, "texas_stage": "D",
            "wifi_wound": 0, "wifi_ischemia": 0, "wifi_infection": 0,
            "sinbad": {
                "site_midfoot_or_hindfoot": true, "ischemia": true, "neuropathy": true,
                "bacterial_infection": true, "area_at_least_1cm2": true,
                "depth_to_tendon_or_bone": true
            }
        },
        "comorbidities": {
            "hypertension": false, "dyslipidemia": false, "coronary_artery_disease": false,
            "congestive_heart_failure": false, "peripheral_vascular_disease": false,
            "previous_amputation": false, "previous_ulceration": false, "stroke": false,
            "chronic_kidney_disease": false, "dialysis": false, "retinopathy": false,
            "peripheral_neuropathy": false, "charcot_foot": false, "obesity": false,
            "copd": false, "immunosuppression": false, "liver_disease": false,
            "hba1c": 7.0, "blood_sugar_control": "moderate"
        },
        "renal": {
            "creatinine": 5.2, "bun": 60.0, "egfr": 10.0, "dialysis_dependent": true,
            "dialysis_type": "hemodialysis", "dialysis_vintage": 30
        },
        "sepsis": {
            "temperature": 37.0, "heart_rate": 80.0, "respiratory_rate": 16.0, "wbc": 8.0,
            "altered_mentation": false, "systolic_bp": 130.0, "crp": 20.0,
            "procalcitonin": 0.1, "lactate": 1.1, "fever": false, "cellulitis": false,
            "lymphangitis": false, "purulent_discharge": false, "crepitus": true,
            "foul_smell": false
        },
        "vascular": {
            "abi_right": 0.2, "abi_left": 0.9, "affected_side": "right",
            "toe_pressure": 10.0, "waveform_type": "absent",
            "dorsalis_pedis_pulse": "absent", "posterior_tibial_pulse": "absent",
            "popliteal_pulse": "diminished", "stenosis": "occluded", "calcification": true,
            "venous_insufficiency": false, "varicose_veins": false, "dvt_history": false
        },
        "osteomyelitis": {
            "probe_to_bone": true, "visible_bone": false, "sausage_toe": false,
            "xray_findings": "normal", "bone_biopsy_result": "positive",
            "esr": 30.0, "ulcer_duration": 3.0, "previous_antibiotic_courses": 0
        }
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-clinician-id", "dr.okafor")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_reports_rule_version() {
    let (status, body) = send(&app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["rule_version"], salvage_rules::RULE_VERSION);
}

#[tokio::test]
async fn rules_expose_weight_tables() {
    let (status, body) = send(&app(), get("/rules")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["wagner_weights"], json!([0, 5, 10, 20, 30, 50]));
    assert_eq!(body["categories"].as_array().unwrap().len(), 8);
    assert_eq!(body["risk_tiers"][3]["min_score"], 200);
    assert_eq!(body["sepsis"]["crp_threshold"], 100.0);
    assert_eq!(body["abi_bands"][4]["advice"], "Urgent vascular consult");
}

#[tokio::test]
async fn compute_returns_result_without_storing() {
    let (status, body) = send(&app(), post_json("/assessments/compute", &snapshot())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk_category"], "critical");
    assert_eq!(body["recommended_intervention"], "Above-Knee Amputation");
    assert!(body["recommendations"][0]
        .as_str()
        .unwrap()
        .starts_with("EMERGENCY"));
}

#[tokio::test]
async fn incomplete_snapshot_is_rejected_with_400() {
    let mut partial = snapshot();
    partial.as_object_mut().unwrap().remove("renal");

    let (status, body) = send(&app(), post_json("/assessments/compute", &partial)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "missing required section: renal");
}

#[tokio::test]
async fn out_of_range_grade_is_rejected_with_400() {
    let mut bad = snapshot();
    bad["wound"]["wifi_ischemia"] = json!(4);

    let (status, _) = send(&app(), post_json("/assessments/compute", &bad)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unparseable_body_is_rejected_with_json_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/assessments/compute")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(&app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn body_without_content_type_is_rejected_with_json_400() {
    let patient = Uuid::new_v4();
    let request = Request::builder()
        .method("POST")
        .uri(format!("/patients/{patient}/assessments"))
        .body(Body::from(snapshot().to_string()))
        .unwrap();

    let (status, body) = send(&app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn stored_assessment_lifecycle() {
    let app = app();
    let patient = Uuid::new_v4();
    let collection = format!("/patients/{patient}/assessments");

    let (status, created) = send(&app, post_json(&collection, &snapshot())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["rule_version"], salvage_rules::RULE_VERSION);
    assert_eq!(created["result"]["rule_version"], salvage_rules::RULE_VERSION);
    assert_eq!(created["assessed_by"], "dr.okafor");
    let assessment_id = created["assessment_id"].as_str().unwrap().to_string();

    let (status, fetched) = send(&app, get(&format!("{collection}/{assessment_id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, listed) = send(&app, get(&collection)).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/assessments/{assessment_id}"))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, delete).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, get(&format!("{collection}/{assessment_id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_assessment_is_404() {
    let uri = format!("/assessments/{}", Uuid::new_v4());
    let delete = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app(), delete).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().starts_with("not found"));
}
