//! Document requirements per visa type and destination, and upload progress
//! against them.

mod catalog;
mod domain;
mod progress;

pub use catalog::{
    catalog_key, catalog_keys, general_requirements, get_visa_specific_requirements,
    resolve_requirements, DocumentRequirement, RequirementLookup, VisaRequirements,
};
pub use domain::{DocumentProfile, DocumentStatus, UploadedDocument};
pub use progress::{calculate_document_progress, DocumentProgress};
