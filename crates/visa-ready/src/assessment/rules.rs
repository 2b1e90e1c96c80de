use super::category::{AssessmentCategory, MAX_CATEGORY_SCORE};
use super::profile::VisaProfile;
use super::CategoryResult;

/// Points deducted from a perfect category score for each failed check.
pub mod penalty {
    pub mod documents {
        pub const INVALID_PASSPORT: u32 = 25;
        pub const INCOMPLETE_FORMS: u32 = 30;
        pub const NON_COMPLIANT_PHOTOS: u32 = 20;
        pub const INCONSISTENT_EMPLOYMENT: u32 = 25;
    }

    pub mod funds {
        pub const INADEQUATE_BALANCE: u32 = 40;
        pub const THIRD_PARTY_FUNDS: u32 = 30;
        pub const SHORT_SEASONING: u32 = 20;
        pub const UNEXPLAINED_DEPOSITS: u32 = 10;
        /// Months funds must have sat in the account.
        pub const MIN_SEASONING_MONTHS: u32 = 6;
    }

    pub mod language {
        pub const NO_PROOF: u32 = 50;
        pub const LOW_TEST_SCORE: u32 = 30;
        pub const NO_BASIC_COMPREHENSION: u32 = 20;
        pub const MIN_TEST_SCORE: u8 = 3;
    }

    pub mod travel {
        pub const NO_PREVIOUS_VISAS: u32 = 20;
        pub const OVERSTAY: u32 = 50;
        pub const DID_NOT_RETURN: u32 = 20;
        pub const NO_INTERNATIONAL_TRAVEL: u32 = 10;
    }

    pub mod background {
        pub const UNVERIFIED_EDUCATION: u32 = 30;
        pub const EXPERIENCE_MISMATCH: u32 = 30;
        pub const SKILLS_NOT_IN_DEMAND: u32 = 20;
        pub const UNEXPLAINED_GAPS: u32 = 20;
    }

    pub mod interview {
        pub const UNPREPARED_QUESTIONS: u32 = 30;
        pub const NO_MOCK_INTERVIEW: u32 = 25;
        pub const UNCLEAR_PURPOSE: u32 = 25;
    }

    pub mod family {
        pub const NO_DEPENDENTS: u32 = 30;
        pub const NO_PROPERTY: u32 = 35;
        pub const NO_OBLIGATIONS: u32 = 35;
    }
}

/// Accumulates penalties and feedback for a single category.
struct Checklist {
    category: AssessmentCategory,
    penalty: u32,
    feedback: Vec<String>,
}

impl Checklist {
    fn new(category: AssessmentCategory) -> Self {
        Self {
            category,
            penalty: 0,
            feedback: Vec::new(),
        }
    }

    fn flag(&mut self, failed: bool, points: u32, message: &str) {
        if failed {
            self.penalty += points;
            self.feedback.push(message.to_string());
        }
    }

    fn finish(self) -> CategoryResult {
        let max = u32::from(MAX_CATEGORY_SCORE);
        let score = max.saturating_sub(self.penalty) as u8;
        CategoryResult {
            category: self.category,
            label: self.category.label(),
            score,
            max_score: MAX_CATEGORY_SCORE,
            weight: self.category.weight(),
            feedback: self.feedback,
        }
    }
}

pub(crate) fn score_categories(profile: &VisaProfile) -> Vec<CategoryResult> {
    AssessmentCategory::ordered()
        .into_iter()
        .map(|category| score_category(category, profile))
        .collect()
}

pub(crate) fn score_category(category: AssessmentCategory, profile: &VisaProfile) -> CategoryResult {
    let mut checks = Checklist::new(category);

    match category {
        AssessmentCategory::DocumentCompleteness => {
            use penalty::documents::*;
            checks.flag(
                !profile.has_valid_passport,
                INVALID_PASSPORT,
                "Passport must be valid for at least 6 months beyond your intended stay",
            );
            checks.flag(
                !profile.all_forms_completed,
                INCOMPLETE_FORMS,
                "Complete every required application form before submitting",
            );
            checks.flag(
                !profile.photos_meet_requirements,
                NON_COMPLIANT_PHOTOS,
                "Passport photos do not meet the embassy size and background rules",
            );
            checks.flag(
                !profile.employment_history_consistent,
                INCONSISTENT_EMPLOYMENT,
                "Employment history differs between your forms and supporting documents",
            );
        }
        AssessmentCategory::ProofOfFunds => {
            use penalty::funds::*;
            checks.flag(
                !profile.bank_balance_adequate,
                INADEQUATE_BALANCE,
                "Bank balance is below the required amount for your visa type",
            );
            checks.flag(
                !profile.funds_in_own_name,
                THIRD_PARTY_FUNDS,
                "Funds should be held in an account under your own name",
            );
            checks.flag(
                profile.savings_duration_months < MIN_SEASONING_MONTHS,
                SHORT_SEASONING,
                "Funds should be held for at least 6 months before applying",
            );
            checks.flag(
                !profile.large_deposits_explained,
                UNEXPLAINED_DEPOSITS,
                "Provide documentation for recent large deposits",
            );
        }
        AssessmentCategory::LanguageProficiency => {
            use penalty::language::*;
            match (
                profile.has_language_certification,
                profile.recorded_test_score(),
            ) {
                (false, None) => checks.flag(
                    true,
                    NO_PROOF,
                    "No language certification or test score on record",
                ),
                (_, Some(score)) if score < MIN_TEST_SCORE => checks.flag(
                    true,
                    LOW_TEST_SCORE,
                    "Language test score is below the minimum requirement",
                ),
                _ => {}
            }
            checks.flag(
                !profile.understands_basic_instructions,
                NO_BASIC_COMPREHENSION,
                "Practice understanding basic instructions in the destination language",
            );
        }
        AssessmentCategory::TravelHistory => {
            use penalty::travel::*;
            checks.flag(
                !profile.has_previous_visas,
                NO_PREVIOUS_VISAS,
                "No previous visas on record to demonstrate compliance",
            );
            checks.flag(
                !profile.never_overstayed,
                OVERSTAY,
                "A previous overstay is a serious concern and must be explained",
            );
            checks.flag(
                !profile.returned_home_after_trips,
                DID_NOT_RETURN,
                "Show evidence that you returned home after previous trips",
            );
            checks.flag(
                profile.international_trips == 0,
                NO_INTERNATIONAL_TRAVEL,
                "Limited international travel history",
            );
        }
        AssessmentCategory::EducationAndWork => {
            use penalty::background::*;
            checks.flag(
                !profile.education_verified,
                UNVERIFIED_EDUCATION,
                "Have your educational credentials verified or evaluated",
            );
            checks.flag(
                !profile.experience_matches_role,
                EXPERIENCE_MISMATCH,
                "Work experience does not align with the intended role or course",
            );
            checks.flag(
                !profile.skills_in_demand,
                SKILLS_NOT_IN_DEMAND,
                "Your skills are not on the destination's in-demand list",
            );
            checks.flag(
                !profile.employment_gaps_explained,
                UNEXPLAINED_GAPS,
                "Prepare explanations for gaps in your employment history",
            );
        }
        AssessmentCategory::InterviewReadiness => {
            use penalty::interview::*;
            checks.flag(
                !profile.knows_common_questions,
                UNPREPARED_QUESTIONS,
                "Review the most common visa interview questions",
            );
            checks.flag(
                !profile.practiced_mock_interview,
                NO_MOCK_INTERVIEW,
                "Practice with a mock interview before your appointment",
            );
            checks.flag(
                !profile.has_clear_purpose,
                UNCLEAR_PURPOSE,
                "Prepare a clear and concise statement of your travel purpose",
            );
        }
        AssessmentCategory::FamilyTies => {
            use penalty::family::*;
            checks.flag(
                !profile.has_dependents_at_home,
                NO_DEPENDENTS,
                "No dependents at home to show ties to your country",
            );
            checks.flag(
                !profile.owns_property,
                NO_PROPERTY,
                "Property ownership would strengthen your home ties",
            );
            checks.flag(
                !profile.has_family_obligations,
                NO_OBLIGATIONS,
                "Document family obligations that require your return",
            );
        }
    }

    checks.finish()
}
