//! Weighted readiness scoring over the intake questionnaire.
//!
//! Each of the seven categories starts from a perfect score and loses a fixed
//! number of points per failed check, floored at zero. The total is the
//! weight-adjusted sum of the category scores.

mod category;
mod profile;
pub mod rules;

#[cfg(test)]
mod tests;

pub use category::{AssessmentCategory, MAX_CATEGORY_SCORE};
pub use profile::VisaProfile;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of categories whose feedback feeds the weakness summary.
pub const WEAKNESS_CATEGORY_LIMIT: usize = 3;
/// Upper bound on weakness messages surfaced to the applicant.
pub const WEAKNESS_MESSAGE_LIMIT: usize = 3;

const EXCELLENT_THRESHOLD: u8 = 80;
const GOOD_THRESHOLD: u8 = 60;

/// Stateless scorer shared by the HTTP and CLI front ends.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReadinessEngine;

impl ReadinessEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, profile: &VisaProfile) -> RiskScoreResult {
        calculate_visa_readiness(profile)
    }
}

/// Score for one category along with what cost it points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    pub category: AssessmentCategory,
    pub label: &'static str,
    pub score: u8,
    pub max_score: u8,
    pub weight: u8,
    pub feedback: Vec<String>,
}

impl CategoryResult {
    /// Score as a fraction of the category maximum, used for ranking.
    pub fn ratio(&self) -> f64 {
        f64::from(self.score) / f64::from(self.max_score)
    }

    /// Contribution to the total in hundredths of a point.
    fn weighted_centipoints(&self) -> u32 {
        u32::from(self.score) * u32::from(self.weight) * 100 / u32::from(self.max_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessLevel {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ReadinessLevel {
    pub const fn from_score(total: u8) -> Self {
        if total >= EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if total >= GOOD_THRESHOLD {
            Self::Good
        } else {
            Self::NeedsImprovement
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Self::Excellent => "Your application is strong and ready to submit.",
            Self::Good => "Your application is solid; address the weaknesses below before submitting.",
            Self::NeedsImprovement => {
                "Your application has significant gaps that are likely to lead to a refusal."
            }
        }
    }
}

/// Full readiness assessment for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScoreResult {
    pub total_score: u8,
    pub readiness_level: ReadinessLevel,
    pub breakdown: Vec<CategoryResult>,
    pub top_weaknesses: Vec<String>,
}

impl RiskScoreResult {
    pub fn category(&self, category: AssessmentCategory) -> Option<&CategoryResult> {
        self.breakdown
            .iter()
            .find(|result| result.category == category)
    }
}

pub fn calculate_visa_readiness(profile: &VisaProfile) -> RiskScoreResult {
    let breakdown = rules::score_categories(profile);
    let total_score = total_score(&breakdown);
    let readiness_level = ReadinessLevel::from_score(total_score);
    let top_weaknesses = top_weaknesses(&breakdown);

    debug!(
        total_score,
        level = readiness_level.label(),
        weaknesses = top_weaknesses.len(),
        "visa readiness assessed"
    );

    RiskScoreResult {
        total_score,
        readiness_level,
        breakdown,
        top_weaknesses,
    }
}

/// Rounds half up, computed in integer hundredths so ties are exact.
fn total_score(breakdown: &[CategoryResult]) -> u8 {
    let centipoints: u32 = breakdown
        .iter()
        .map(CategoryResult::weighted_centipoints)
        .sum();
    ((centipoints + 50) / 100).min(100) as u8
}

/// Weakest categories first. Categories are cut to the limit before their
/// feedback is flattened, so one category may fill every message slot.
fn top_weaknesses(breakdown: &[CategoryResult]) -> Vec<String> {
    let mut ranked: Vec<&CategoryResult> = breakdown.iter().collect();
    ranked.sort_by(|a, b| a.ratio().total_cmp(&b.ratio()));

    ranked
        .into_iter()
        .filter(|result| !result.feedback.is_empty())
        .take(WEAKNESS_CATEGORY_LIMIT)
        .flat_map(|result| result.feedback.iter().cloned())
        .take(WEAKNESS_MESSAGE_LIMIT)
        .collect()
}
