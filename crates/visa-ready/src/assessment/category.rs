use serde::{Deserialize, Serialize};

/// Upper bound for every category score.
pub const MAX_CATEGORY_SCORE: u8 = 100;

/// The seven scored areas of an application, in breakdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentCategory {
    DocumentCompleteness,
    ProofOfFunds,
    LanguageProficiency,
    TravelHistory,
    EducationAndWork,
    InterviewReadiness,
    FamilyTies,
}

impl AssessmentCategory {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::DocumentCompleteness,
            Self::ProofOfFunds,
            Self::LanguageProficiency,
            Self::TravelHistory,
            Self::EducationAndWork,
            Self::InterviewReadiness,
            Self::FamilyTies,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DocumentCompleteness => "Document Completeness",
            Self::ProofOfFunds => "Proof of Funds",
            Self::LanguageProficiency => "Language Proficiency",
            Self::TravelHistory => "Travel History",
            Self::EducationAndWork => "Education/Work Background",
            Self::InterviewReadiness => "Interview Readiness",
            Self::FamilyTies => "Family Ties",
        }
    }

    /// Share of the total score, in points. The seven weights sum to 100.
    pub const fn weight(self) -> u8 {
        match self {
            Self::DocumentCompleteness => 20,
            Self::ProofOfFunds => 25,
            Self::LanguageProficiency => 15,
            Self::TravelHistory => 10,
            Self::EducationAndWork => 10,
            Self::InterviewReadiness => 15,
            Self::FamilyTies => 5,
        }
    }
}
