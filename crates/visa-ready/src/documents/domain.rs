use serde::{Deserialize, Serialize};

/// Processing state of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Pending,
    Processing,
    Completed,
    Verified,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl DocumentStatus {
    /// Only analysed or verified uploads count towards progress.
    pub const fn counts_towards_progress(self) -> bool {
        matches!(self, Self::Completed | Self::Verified)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Completed => "Completed",
            Self::Verified => "Verified",
            Self::Rejected => "Rejected",
            Self::Unknown => "Unknown",
        }
    }
}

/// A document the applicant has uploaded, identified by its requirement id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedDocument {
    #[serde(alias = "type")]
    pub document_type: String,
    pub status: DocumentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl UploadedDocument {
    pub fn new(document_type: impl Into<String>, status: DocumentStatus) -> Self {
        Self {
            document_type: document_type.into(),
            status,
            file_name: None,
        }
    }

    pub fn satisfies(&self, requirement_id: &str) -> bool {
        self.document_type == requirement_id && self.status.counts_towards_progress()
    }
}

/// The slice of the applicant profile that selects a requirement set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentProfile {
    pub visa_type: Option<String>,
    pub destination_country: Option<String>,
}

impl DocumentProfile {
    pub fn new(visa_type: impl Into<String>, destination_country: impl Into<String>) -> Self {
        Self {
            visa_type: Some(visa_type.into()),
            destination_country: Some(destination_country.into()),
        }
    }

    /// Visa type and destination, or `None` while either is blank.
    pub fn selection(&self) -> Option<(&str, &str)> {
        let visa_type = non_blank(self.visa_type.as_deref())?;
        let destination = non_blank(self.destination_country.as_deref())?;
        Some((visa_type, destination))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.trim().is_empty())
}
