use crate::assessment::VisaProfile;

/// Applicant who passes every check.
pub(super) fn prepared_profile() -> VisaProfile {
    VisaProfile {
        has_valid_passport: true,
        all_forms_completed: true,
        photos_meet_requirements: true,
        employment_history_consistent: true,
        bank_balance_adequate: true,
        funds_in_own_name: true,
        savings_duration_months: 12,
        large_deposits_explained: true,
        has_language_certification: true,
        language_test_score: None,
        understands_basic_instructions: true,
        has_previous_visas: true,
        never_overstayed: true,
        returned_home_after_trips: true,
        international_trips: 3,
        education_verified: true,
        experience_matches_role: true,
        skills_in_demand: true,
        employment_gaps_explained: true,
        knows_common_questions: true,
        practiced_mock_interview: true,
        has_clear_purpose: true,
        has_dependents_at_home: true,
        owns_property: true,
        has_family_obligations: true,
    }
}

/// Prepared applicant with an expired passport, thin and recently seasoned
/// funds, and a past overstay.
pub(super) fn overstay_profile() -> VisaProfile {
    VisaProfile {
        has_valid_passport: false,
        bank_balance_adequate: false,
        savings_duration_months: 2,
        never_overstayed: false,
        ..prepared_profile()
    }
}
