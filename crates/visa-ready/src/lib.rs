//! Visa application readiness: weighted questionnaire scoring and document
//! requirement tracking, plus the configuration, error and telemetry plumbing
//! shared by the service binaries.

pub mod assessment;
pub mod config;
pub mod documents;
pub mod error;
pub mod telemetry;

pub use assessment::{calculate_visa_readiness, RiskScoreResult, VisaProfile};
pub use documents::{
    calculate_document_progress, get_visa_specific_requirements, DocumentProgress,
};
