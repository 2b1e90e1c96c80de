//! Readiness scoring through the public crate surface, including the JSON
//! shapes the intake form submits and the dashboard reads back.

use serde_json::json;
use visa_ready::assessment::{
    AssessmentCategory, ReadinessEngine, ReadinessLevel, VisaProfile, WEAKNESS_MESSAGE_LIMIT,
};
use visa_ready::calculate_visa_readiness;

fn intake_answers() -> serde_json::Value {
    json!({
        "hasValidPassport": false,
        "allFormsCompleted": true,
        "photosMeetRequirements": true,
        "employmentHistoryConsistent": true,
        "bankBalanceAdequate": false,
        "fundsInOwnName": true,
        "savingsDurationMonths": 2,
        "largeDepositsExplained": true,
        "hasLanguageCertification": true,
        "understandsBasicInstructions": true,
        "hasPreviousVisas": true,
        "neverOverstayed": false,
        "returnedHomeAfterTrips": true,
        "internationalTrips": 4,
        "educationVerified": true,
        "experienceMatchesRole": true,
        "skillsInDemand": true,
        "employmentGapsExplained": true,
        "knowsCommonQuestions": true,
        "practicedMockInterview": true,
        "hasClearPurpose": true,
        "hasDependentsAtHome": true,
        "ownsProperty": true,
        "hasFamilyObligations": true
    })
}

#[test]
fn intake_json_scores_as_expected() {
    let profile: VisaProfile = serde_json::from_value(intake_answers()).expect("profile parses");

    let result = calculate_visa_readiness(&profile);

    assert_eq!(result.total_score, 75);
    assert_eq!(result.readiness_level, ReadinessLevel::Good);
    assert_eq!(result.top_weaknesses.len(), WEAKNESS_MESSAGE_LIMIT);
}

#[test]
fn omitted_answers_count_against_the_applicant() {
    let profile: VisaProfile =
        serde_json::from_value(json!({ "hasValidPassport": true })).expect("profile parses");

    assert!(profile.has_valid_passport);
    assert!(!profile.all_forms_completed);
    assert_eq!(profile.savings_duration_months, 0);
    assert_eq!(profile.language_test_score, None);

    let result = ReadinessEngine::new().assess(&profile);
    let documents = result
        .category(AssessmentCategory::DocumentCompleteness)
        .expect("documents scored");
    assert_eq!(documents.score, 25);
    assert_eq!(result.readiness_level, ReadinessLevel::NeedsImprovement);
}

#[test]
fn result_serializes_for_the_dashboard() {
    let profile: VisaProfile = serde_json::from_value(intake_answers()).expect("profile parses");
    let result = calculate_visa_readiness(&profile);

    let body = serde_json::to_value(&result).expect("result serializes");

    assert_eq!(body["totalScore"], 75);
    assert_eq!(body["readinessLevel"], "Good");
    let breakdown = body["breakdown"].as_array().expect("breakdown array");
    assert_eq!(breakdown.len(), 7);
    assert_eq!(breakdown[1]["category"], "proof_of_funds");
    assert_eq!(breakdown[1]["label"], "Proof of Funds");
    assert_eq!(breakdown[1]["score"], 40);
    assert_eq!(breakdown[1]["maxScore"], 100);
    assert_eq!(breakdown[1]["weight"], 25);
    assert!(body["topWeaknesses"].is_array());
}

#[test]
fn scores_stay_within_bounds_across_single_failures() {
    let baseline: VisaProfile = serde_json::from_value(json!({
        "hasValidPassport": true, "allFormsCompleted": true, "photosMeetRequirements": true,
        "employmentHistoryConsistent": true, "bankBalanceAdequate": true, "fundsInOwnName": true,
        "savingsDurationMonths": 8, "largeDepositsExplained": true,
        "hasLanguageCertification": true, "understandsBasicInstructions": true,
        "hasPreviousVisas": true, "neverOverstayed": true, "returnedHomeAfterTrips": true,
        "internationalTrips": 1, "educationVerified": true, "experienceMatchesRole": true,
        "skillsInDemand": true, "employmentGapsExplained": true, "knowsCommonQuestions": true,
        "practicedMockInterview": true, "hasClearPurpose": true, "hasDependentsAtHome": true,
        "ownsProperty": true, "hasFamilyObligations": true
    }))
    .expect("baseline parses");
    assert_eq!(calculate_visa_readiness(&baseline).total_score, 100);

    let variants = [
        VisaProfile { has_valid_passport: false, ..baseline.clone() },
        VisaProfile { funds_in_own_name: false, ..baseline.clone() },
        VisaProfile { language_test_score: Some(1), ..baseline.clone() },
        VisaProfile { returned_home_after_trips: false, ..baseline.clone() },
        VisaProfile { experience_matches_role: false, ..baseline.clone() },
        VisaProfile { has_clear_purpose: false, ..baseline.clone() },
        VisaProfile { has_family_obligations: false, ..baseline.clone() },
    ];

    for profile in variants {
        let result = calculate_visa_readiness(&profile);
        assert!(result.total_score < 100);
        assert!(result.total_score >= 90);
        assert_eq!(result.top_weaknesses.len(), 1);
    }
}
