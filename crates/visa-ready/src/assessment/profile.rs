use serde::{Deserialize, Serialize};

/// Questionnaire answers collected during intake. Every field defaults to its
/// unfavourable value so a partially answered profile scores conservatively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisaProfile {
    // Document completeness
    pub has_valid_passport: bool,
    pub all_forms_completed: bool,
    pub photos_meet_requirements: bool,
    pub employment_history_consistent: bool,

    // Proof of funds
    pub bank_balance_adequate: bool,
    pub funds_in_own_name: bool,
    pub savings_duration_months: u32,
    pub large_deposits_explained: bool,

    // Language proficiency
    pub has_language_certification: bool,
    pub language_test_score: Option<u8>,
    pub understands_basic_instructions: bool,

    // Travel history
    pub has_previous_visas: bool,
    pub never_overstayed: bool,
    pub returned_home_after_trips: bool,
    pub international_trips: u32,

    // Education and work background
    pub education_verified: bool,
    pub experience_matches_role: bool,
    pub skills_in_demand: bool,
    pub employment_gaps_explained: bool,

    // Interview readiness
    pub knows_common_questions: bool,
    pub practiced_mock_interview: bool,
    pub has_clear_purpose: bool,

    // Family ties
    pub has_dependents_at_home: bool,
    pub owns_property: bool,
    pub has_family_obligations: bool,
}

impl VisaProfile {
    /// A zero test score counts as no score at all.
    pub(crate) fn recorded_test_score(&self) -> Option<u8> {
        self.language_test_score.filter(|score| *score > 0)
    }
}
