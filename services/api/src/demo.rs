use crate::infra::load_json;
use clap::Args;
use std::path::PathBuf;
use visa_ready::assessment::{ReadinessEngine, RiskScoreResult, VisaProfile};
use visa_ready::documents::{
    calculate_document_progress, catalog_keys, resolve_requirements, DocumentProfile,
    DocumentProgress, DocumentStatus, RequirementLookup, UploadedDocument,
};
use visa_ready::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file holding the questionnaire answers
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Print the raw assessment as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DocumentsArgs {
    /// Visa type, e.g. Student, Work or Tourist
    #[arg(long)]
    pub(crate) visa_type: String,
    /// Destination country, e.g. Canada
    #[arg(long)]
    pub(crate) destination: String,
    /// JSON file listing uploaded documents and their status
    #[arg(long)]
    pub(crate) uploaded: Option<PathBuf>,
    /// Print the raw progress as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RequirementsArgs {
    /// Visa type; omit together with --destination to list catalog entries
    #[arg(long, requires = "destination")]
    pub(crate) visa_type: Option<String>,
    /// Destination country
    #[arg(long, requires = "visa_type")]
    pub(crate) destination: Option<String>,
}

pub(crate) fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let profile: VisaProfile = load_json(&args.profile)?;
    let result = ReadinessEngine::new().assess(&profile);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_assessment(&result);
    }
    Ok(())
}

pub(crate) fn run_document_progress(args: DocumentsArgs) -> Result<(), AppError> {
    let profile = DocumentProfile::new(args.visa_type, args.destination);
    if profile.selection().is_none() {
        return Err(AppError::InvalidRequest(
            "--visa-type and --destination must not be blank".to_string(),
        ));
    }

    let uploaded: Vec<UploadedDocument> = match &args.uploaded {
        Some(path) => load_json(path)?,
        None => Vec::new(),
    };
    let progress = calculate_document_progress(&profile, &uploaded);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&progress)?);
    } else {
        render_document_progress(&progress);
    }
    Ok(())
}

pub(crate) fn run_requirements(args: RequirementsArgs) -> Result<(), AppError> {
    match (args.visa_type, args.destination) {
        (Some(visa_type), Some(destination)) => {
            render_requirements(&resolve_requirements(&visa_type, &destination));
        }
        _ => {
            println!("Catalog entries");
            for key in catalog_keys() {
                println!("- {key}");
            }
            println!("Any other combination uses the general requirements.");
        }
    }
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("Visa readiness demo");
    println!("Applicant: student bound for Canada, funds recently deposited\n");

    let result = ReadinessEngine::new().assess(&sample_profile());
    render_assessment(&result);

    let profile = DocumentProfile::new("Student", "Canada");
    let progress = calculate_document_progress(&profile, &sample_uploads());
    println!();
    render_document_progress(&progress);

    Ok(())
}

fn sample_profile() -> VisaProfile {
    VisaProfile {
        has_valid_passport: true,
        all_forms_completed: true,
        photos_meet_requirements: true,
        employment_history_consistent: true,
        bank_balance_adequate: true,
        funds_in_own_name: true,
        savings_duration_months: 3,
        large_deposits_explained: false,
        has_language_certification: true,
        language_test_score: Some(7),
        understands_basic_instructions: true,
        has_previous_visas: false,
        never_overstayed: true,
        returned_home_after_trips: true,
        international_trips: 1,
        education_verified: true,
        experience_matches_role: true,
        skills_in_demand: false,
        employment_gaps_explained: true,
        knows_common_questions: false,
        practiced_mock_interview: false,
        has_clear_purpose: true,
        has_dependents_at_home: false,
        owns_property: false,
        has_family_obligations: true,
    }
}

fn sample_uploads() -> Vec<UploadedDocument> {
    vec![
        UploadedDocument::new("passport", DocumentStatus::Verified),
        UploadedDocument::new("acceptance_letter", DocumentStatus::Completed),
        UploadedDocument::new("proof_of_funds", DocumentStatus::Processing),
        UploadedDocument::new("language_test", DocumentStatus::Verified),
    ]
}

fn render_assessment(result: &RiskScoreResult) {
    println!(
        "Readiness score: {}/100 ({})",
        result.total_score,
        result.readiness_level.label()
    );
    println!("{}", result.readiness_level.summary());

    println!("\nCategory breakdown");
    for category in &result.breakdown {
        println!(
            "- {}: {}/{} (weight {})",
            category.label, category.score, category.max_score, category.weight
        );
    }

    if result.top_weaknesses.is_empty() {
        println!("\nTop weaknesses: none");
    } else {
        println!("\nTop weaknesses");
        for weakness in &result.top_weaknesses {
            println!("- {weakness}");
        }
    }
}

fn render_document_progress(progress: &DocumentProgress) {
    println!("Documents: {}", progress.description);
    println!(
        "Progress: {}% ({}/{} critical documents)",
        progress.progress, progress.completed, progress.total
    );

    if progress.missing.is_empty() {
        println!("Missing critical documents: none");
    } else {
        println!("Missing critical documents");
        for requirement in &progress.missing {
            println!("- {} [{}]", requirement.name, requirement.id);
        }
    }
}

fn render_requirements(lookup: &RequirementLookup) {
    let requirements = lookup.requirements;
    if lookup.fallback {
        println!(
            "No catalog entry for '{}'; showing general requirements",
            lookup.key
        );
    }
    println!(
        "{} ({} critical documents required)",
        requirements.description, requirements.total_required
    );
    for requirement in requirements.required {
        let marker = if requirement.critical {
            "critical"
        } else {
            "recommended"
        };
        println!("- {} [{}] {}", requirement.name, requirement.id, marker);
    }
}
