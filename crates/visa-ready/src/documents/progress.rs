use serde::Serialize;
use tracing::debug;

use super::catalog::{resolve_requirements, DocumentRequirement};
use super::domain::{DocumentProfile, UploadedDocument};

const INCOMPLETE_PROFILE_MESSAGE: &str =
    "Complete your profile with a visa type and destination to see document requirements";

/// How far an applicant is through the critical documents for their visa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentProgress {
    pub progress: u8,
    pub completed: usize,
    pub total: usize,
    pub requirements: Vec<DocumentRequirement>,
    pub missing: Vec<DocumentRequirement>,
    pub description: String,
}

impl DocumentProgress {
    fn incomplete_profile() -> Self {
        Self {
            progress: 0,
            completed: 0,
            total: 0,
            requirements: Vec::new(),
            missing: Vec::new(),
            description: INCOMPLETE_PROFILE_MESSAGE.to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.missing.is_empty()
    }
}

pub fn calculate_document_progress(
    profile: &DocumentProfile,
    uploaded: &[UploadedDocument],
) -> DocumentProgress {
    let Some((visa_type, destination)) = profile.selection() else {
        return DocumentProgress::incomplete_profile();
    };

    let lookup = resolve_requirements(visa_type, destination);
    let requirements = lookup.requirements;

    let (matched, missing): (Vec<_>, Vec<_>) = requirements
        .critical()
        .copied()
        .partition(|requirement| uploaded.iter().any(|doc| doc.satisfies(requirement.id)));

    let completed = matched.len();
    let total = requirements.total_required;
    let progress = percent(completed, total);

    debug!(
        key = %lookup.key,
        fallback = lookup.fallback,
        completed,
        total,
        progress,
        "document progress calculated"
    );

    DocumentProgress {
        progress,
        completed,
        total,
        requirements: requirements.required.to_vec(),
        missing,
        description: requirements.description.to_string(),
    }
}

/// Rounded share of `total`, capped at 100 when the authored total undercounts.
fn percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (completed * 200 + total) / (total * 2);
    rounded.min(100) as u8
}
