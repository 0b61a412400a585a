mod common;

use salvage_core::models::demographics::SmokingStatus;
use salvage_core::models::grades::{WagnerGrade, WifiGrade};
use salvage_core::models::osteomyelitis::{BiopsyResult, MriFinding, XrayFindings};
use salvage_core::models::vascular::{AffectedSide, WaveformType};
use salvage_rules::categories::arterial::ArterialStatus;
use salvage_rules::categories::comorbidities::ComorbidityBurden;
use salvage_rules::categories::demographics::DemographicsHistory;
use salvage_rules::categories::osteomyelitis::OsteomyelitisContribution;
use salvage_rules::categories::renal::RenalFunction;
use salvage_rules::categories::sepsis::SepsisIndicators;
use salvage_rules::categories::wagner::WagnerContribution;
use salvage_rules::categories::wifi::WifiContribution;
use salvage_rules::{all_categories, get_category, ScoreCategory};

#[test]
fn baseline_scores_only_the_wagner_grade() {
    let input = common::low_risk_input();
    let scores: Vec<(String, u32)> = all_categories()
        .iter()
        .map(|c| (c.id().to_string(), c.score(&input)))
        .collect();

    for (id, score) in &scores {
        let expected = if id == "wagner" { 5 } else { 0 };
        assert_eq!(*score, expected, "category {id}");
    }
}

#[test]
fn categories_are_listed_in_breakdown_order() {
    let ids: Vec<String> = all_categories().iter().map(|c| c.id().to_string()).collect();
    assert_eq!(
        ids,
        [
            "demographics",
            "wagner",
            "wifi",
            "comorbidities",
            "renal",
            "sepsis",
            "arterial",
            "osteomyelitis"
        ]
    );
}

#[test]
fn get_category_finds_by_id() {
    let renal = get_category("renal").expect("renal category");
    assert_eq!(renal.name(), "Renal Status");
    assert_eq!(renal.max_score(), 55);
    assert!(get_category("sinbad").is_none());
}

#[test]
fn demographics_awards_highest_age_tier_only() {
    let cases = [(60, 0), (61, 10), (70, 10), (71, 15), (80, 15), (81, 20), (95, 20)];
    for (age, expected) in cases {
        let mut d = common::demographics();
        d.age = age;
        let input = common::low_risk_input().to_builder().demographics(d).build().unwrap();
        assert_eq!(DemographicsHistory.score(&input), expected, "age {age}");
    }
}

#[test]
fn demographics_combines_smoking_and_duration() {
    let mut d = common::demographics();
    d.age = 85;
    d.smoking_status = SmokingStatus::Current;
    d.diabetes_duration = 25.0;
    let input = common::low_risk_input().to_builder().demographics(d.clone()).build().unwrap();
    assert_eq!(DemographicsHistory.score(&input), 55);

    d.smoking_status = SmokingStatus::Former;
    d.diabetes_duration = 15.0;
    let input = common::low_risk_input().to_builder().demographics(d).build().unwrap();
    assert_eq!(DemographicsHistory.score(&input), 20 + 10 + 10);
}

#[test]
fn negative_age_propagates_without_error() {
    let mut d = common::demographics();
    d.age = -4;
    let input = common::low_risk_input().to_builder().demographics(d).build().unwrap();
    assert_eq!(DemographicsHistory.score(&input), 0);
}

#[test]
fn wagner_follows_weight_table() {
    let expected = [0, 5, 10, 20, 30, 50];
    for (grade, points) in WagnerGrade::ALL.into_iter().zip(expected) {
        let mut w = common::wound();
        w.wagner_grade = grade;
        let input = common::low_risk_input().to_builder().wound(w).build().unwrap();
        assert_eq!(WagnerContribution.score(&input), points, "{grade:?}");
    }
}

#[test]
fn wifi_sums_axes_times_five() {
    let mut w = common::wound();
    w.wifi_wound = WifiGrade::Grade2;
    w.wifi_ischemia = WifiGrade::Grade1;
    w.wifi_infection = WifiGrade::Grade3;
    let input = common::low_risk_input().to_builder().wound(w.clone()).build().unwrap();
    assert_eq!(WifiContribution.score(&input), 30);

    w.wifi_wound = WifiGrade::Grade3;
    w.wifi_ischemia = WifiGrade::Grade3;
    let input = common::low_risk_input().to_builder().wound(w).build().unwrap();
    assert_eq!(WifiContribution.score(&input), 45);
}

#[test]
fn sinbad_does_not_change_any_category() {
    let mut w = common::wound();
    w.sinbad.ischemia = true;
    w.sinbad.neuropathy = true;
    w.sinbad.depth_to_tendon_or_bone = true;
    let with_sinbad = common::low_risk_input().to_builder().wound(w).build().unwrap();
    let baseline = common::low_risk_input();

    for category in all_categories() {
        assert_eq!(category.score(&with_sinbad), category.score(&baseline));
    }
}

#[test]
fn comorbidities_add_flags_and_hba1c_tier() {
    let mut c = common::comorbidities();
    c.dialysis = true;
    c.congestive_heart_failure = true;
    c.coronary_artery_disease = true;
    c.peripheral_vascular_disease = true;
    c.previous_amputation = true;
    c.hba1c = 11.2;
    // Flags without weights must not score.
    c.hypertension = true;
    c.obesity = true;
    let input = common::low_risk_input().to_builder().comorbidities(c.clone()).build().unwrap();
    assert_eq!(ComorbidityBurden.score(&input), 15 + 10 + 8 + 10 + 15 + 15);

    c.hba1c = 9.0;
    let input = common::low_risk_input().to_builder().comorbidities(c.clone()).build().unwrap();
    assert_eq!(ComorbidityBurden.score(&input), 58 + 8);

    c.hba1c = 8.0;
    let input = common::low_risk_input().to_builder().comorbidities(c).build().unwrap();
    assert_eq!(ComorbidityBurden.score(&input), 58);
}

#[test]
fn renal_tiers_and_dialysis_are_additive() {
    let cases = [
        (95.0, false, 0),
        (60.0, false, 0),
        (59.9, false, 15),
        (29.0, false, 25),
        (14.0, false, 35),
        (45.0, true, 35),
    ];
    for (egfr, dialysis, expected) in cases {
        let mut r = common::renal();
        r.egfr = egfr;
        r.dialysis_dependent = dialysis;
        let input = common::low_risk_input().to_builder().renal(r).build().unwrap();
        assert_eq!(RenalFunction.score(&input), expected, "egfr {egfr}, dialysis {dialysis}");
    }
}

#[test]
fn renal_worst_case_is_exactly_its_maximum() {
    let mut r = common::renal();
    r.egfr = 10.0;
    r.dialysis_dependent = true;
    let input = common::low_risk_input().to_builder().renal(r).build().unwrap();
    assert_eq!(RenalFunction.raw_score(&input), 55);
    assert_eq!(RenalFunction.score(&input), 55);
}

#[test]
fn sepsis_scores_sirs_and_local_signs() {
    let mut s = common::sepsis();
    s.temperature = 38.6;
    s.heart_rate = 104.0;
    s.crp = 140.0;
    let input = common::low_risk_input().to_builder().sepsis(s).build().unwrap();
    assert_eq!(SepsisIndicators.score(&input), 10 + 15);
}

#[test]
fn sepsis_is_clamped_to_seventy() {
    let mut s = common::sepsis();
    s.temperature = 35.2;
    s.heart_rate = 120.0;
    s.respiratory_rate = 28.0;
    s.wbc = 19.0;
    s.altered_mentation = true;
    s.systolic_bp = 85.0;
    s.crepitus = true;
    s.crp = 250.0;
    let input = common::low_risk_input().to_builder().sepsis(s).build().unwrap();
    assert_eq!(SepsisIndicators.raw_score(&input), 75);
    assert_eq!(SepsisIndicators.score(&input), 70);
}

#[test]
fn arterial_uses_affected_side_and_waveform() {
    let mut v = common::vascular();
    v.abi_left = 0.55;
    v.abi_right = 1.1;
    v.affected_side = AffectedSide::Left;
    v.waveform_type = WaveformType::Monophasic;
    let input = common::low_risk_input().to_builder().vascular(v.clone()).build().unwrap();
    assert_eq!(ArterialStatus.score(&input), 25 + 10);

    v.affected_side = AffectedSide::Right;
    let input = common::low_risk_input().to_builder().vascular(v.clone()).build().unwrap();
    assert_eq!(ArterialStatus.score(&input), 10);

    v.affected_side = AffectedSide::Bilateral;
    v.abi_right = 0.3;
    v.waveform_type = WaveformType::Absent;
    let input = common::low_risk_input().to_builder().vascular(v).build().unwrap();
    assert_eq!(ArterialStatus.score(&input), 60);
}

#[test]
fn osteomyelitis_contribution_clamps_all_findings_to_fifty() {
    let mut o = common::osteomyelitis();
    o.probe_to_bone = true;
    o.visible_bone = true;
    o.xray_findings = XrayFindings::Definite;
    o.mri_finding = Some(MriFinding::Positive);
    o.bone_biopsy_result = Some(BiopsyResult::Positive);
    let input = common::low_risk_input().to_builder().osteomyelitis(o).build().unwrap();
    assert_eq!(OsteomyelitisContribution.raw_score(&input), 95);
    assert_eq!(OsteomyelitisContribution.score(&input), 50);
}

#[test]
fn osteomyelitis_contribution_ignores_suspicious_imaging() {
    let mut o = common::osteomyelitis();
    o.xray_findings = XrayFindings::Suspicious;
    o.mri_finding = Some(MriFinding::Suspicious);
    o.sausage_toe = true;
    o.bone_biopsy_result = Some(BiopsyResult::Pending);
    let input = common::low_risk_input().to_builder().osteomyelitis(o).build().unwrap();
    assert_eq!(OsteomyelitisContribution.score(&input), 0);
}
