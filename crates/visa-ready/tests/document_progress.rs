//! Document progress and catalog lookups as the dashboard and document-check
//! pages consume them.

use serde_json::json;
use visa_ready::documents::{
    calculate_document_progress, get_visa_specific_requirements, DocumentProfile, DocumentStatus,
    UploadedDocument,
};

const CANADA_STUDENT_CRITICAL: [&str; 5] = [
    "passport",
    "acceptance_letter",
    "proof_of_funds",
    "study_plan",
    "biometrics",
];

#[test]
fn missing_visa_type_or_destination_returns_empty_progress() {
    for profile in [
        DocumentProfile::new("", "Canada"),
        DocumentProfile::new("Student", ""),
        DocumentProfile::default(),
    ] {
        let progress = calculate_document_progress(&profile, &[]);
        assert_eq!(progress.progress, 0);
        assert_eq!(progress.completed, 0);
        assert_eq!(progress.total, 0);
        assert!(progress.requirements.is_empty());
        assert!(progress.missing.is_empty());
        assert!(progress.description.contains("Complete your profile"));
    }
}

#[test]
fn nothing_uploaded_leaves_every_critical_document_missing() {
    let profile = DocumentProfile::new("Student", "Canada");

    let progress = calculate_document_progress(&profile, &[]);

    assert_eq!(progress.completed, 0);
    assert_eq!(progress.progress, 0);
    assert_eq!(progress.total, 5);
    let missing: Vec<_> = progress.missing.iter().map(|doc| doc.id).collect();
    assert_eq!(missing, CANADA_STUDENT_CRITICAL.to_vec());
}

#[test]
fn verified_critical_documents_complete_the_checklist() {
    let profile = DocumentProfile::new("Student", "Canada");
    let uploaded: Vec<_> = CANADA_STUDENT_CRITICAL
        .iter()
        .map(|id| UploadedDocument::new(*id, DocumentStatus::Verified))
        .collect();

    let progress = calculate_document_progress(&profile, &uploaded);

    assert_eq!(progress.progress, 100);
    assert_eq!(progress.completed, 5);
    assert!(progress.missing.is_empty());
    assert!(progress.is_complete());
}

#[test]
fn partial_uploads_round_to_whole_percent() {
    let profile = DocumentProfile::new("student", "canada");
    let uploaded = vec![
        UploadedDocument::new("passport", DocumentStatus::Completed),
        UploadedDocument::new("study_plan", DocumentStatus::Verified),
        UploadedDocument::new("biometrics", DocumentStatus::Processing),
    ];

    let progress = calculate_document_progress(&profile, &uploaded);

    assert_eq!(progress.completed, 2);
    assert_eq!(progress.progress, 40);
    assert_eq!(progress.missing.len(), 3);
}

#[test]
fn unknown_combination_uses_general_checklist() {
    let profile = DocumentProfile::new("Business", "Germany");
    let uploaded = vec![UploadedDocument::new("passport", DocumentStatus::Verified)];

    let progress = calculate_document_progress(&profile, &uploaded);

    assert_eq!(progress.total, 3);
    assert_eq!(progress.completed, 1);
    assert_eq!(progress.progress, 33);
    let missing: Vec<_> = progress.missing.iter().map(|doc| doc.id).collect();
    assert_eq!(missing, vec!["proof_of_funds", "purpose_of_travel"]);
}

#[test]
fn authored_total_is_used_even_when_unreachable() {
    let requirements = get_visa_specific_requirements("Work", "UK");
    let uploaded: Vec<_> = requirements
        .critical()
        .map(|doc| UploadedDocument::new(doc.id, DocumentStatus::Verified))
        .collect();

    let progress = calculate_document_progress(&DocumentProfile::new("Work", "UK"), &uploaded);

    assert_eq!(progress.completed, 4);
    assert_eq!(progress.total, 5);
    assert_eq!(progress.progress, 80);
    assert!(progress.missing.is_empty());
    assert!(progress.is_complete());
}

#[test]
fn progress_caps_when_authored_total_undercounts() {
    let requirements = get_visa_specific_requirements("Tourist", "Australia");
    let uploaded: Vec<_> = requirements
        .critical()
        .map(|doc| UploadedDocument::new(doc.id, DocumentStatus::Completed))
        .collect();

    let progress =
        calculate_document_progress(&DocumentProfile::new("Tourist", "Australia"), &uploaded);

    assert_eq!(progress.completed, 4);
    assert_eq!(progress.total, 3);
    assert_eq!(progress.progress, 100);
}

#[test]
fn uploads_deserialize_from_storage_rows() {
    let uploaded: Vec<UploadedDocument> = serde_json::from_value(json!([
        { "type": "passport", "status": "verified", "fileName": "passport.pdf" },
        { "documentType": "ds160_confirmation", "status": "completed" },
        { "type": "proof_of_funds", "status": "failed" }
    ]))
    .expect("uploads parse");

    let progress = calculate_document_progress(&DocumentProfile::new("Tourist", "USA"), &uploaded);

    assert_eq!(progress.completed, 2);
    assert_eq!(progress.progress, 67);

    let body = serde_json::to_value(&progress).expect("progress serializes");
    assert_eq!(body["missing"][0]["id"], "proof_of_funds");
    assert_eq!(body["missing"][0]["critical"], true);
    assert_eq!(body["description"], "US B-2 visitor visa");
}
