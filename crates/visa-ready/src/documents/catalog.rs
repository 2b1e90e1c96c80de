use serde::Serialize;

/// A single document an application must or should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentRequirement {
    pub id: &'static str,
    pub name: &'static str,
    pub critical: bool,
}

/// Requirement set for one visa type and destination.
///
/// `total_required` is authored alongside the list and is not derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisaRequirements {
    pub required: &'static [DocumentRequirement],
    pub total_required: usize,
    pub description: &'static str,
}

impl VisaRequirements {
    pub fn critical(&self) -> impl Iterator<Item = &'static DocumentRequirement> {
        self.required.iter().filter(|requirement| requirement.critical)
    }
}

/// Outcome of resolving a visa type and destination against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementLookup {
    pub key: String,
    pub fallback: bool,
    pub requirements: &'static VisaRequirements,
}

const fn critical(id: &'static str, name: &'static str) -> DocumentRequirement {
    DocumentRequirement {
        id,
        name,
        critical: true,
    }
}

const fn recommended(id: &'static str, name: &'static str) -> DocumentRequirement {
    DocumentRequirement {
        id,
        name,
        critical: false,
    }
}

static GENERAL_REQUIREMENTS: VisaRequirements = VisaRequirements {
    required: &[
        critical("passport", "Valid Passport"),
        critical("proof_of_funds", "Proof of Funds"),
        critical("purpose_of_travel", "Purpose of Travel Document"),
    ],
    total_required: 3,
    description: "General visa application requirements",
};

static CATALOG: &[(&str, VisaRequirements)] = &[
    (
        "student-canada",
        VisaRequirements {
            required: &[
                critical("passport", "Valid Passport"),
                critical("acceptance_letter", "Letter of Acceptance from a DLI"),
                critical("proof_of_funds", "Proof of Funds"),
                critical("study_plan", "Study Plan / Statement of Purpose"),
                critical("biometrics", "Biometrics Confirmation"),
                recommended("language_test", "IELTS or CELPIP Results"),
                recommended("medical_exam", "Immigration Medical Exam"),
            ],
            total_required: 5,
            description: "Canadian study permit",
        },
    ),
    (
        "work-canada",
        VisaRequirements {
            required: &[
                critical("passport", "Valid Passport"),
                critical("job_offer", "Job Offer Letter"),
                critical("lmia", "Labour Market Impact Assessment"),
                critical("educational_credentials", "Educational Credential Assessment"),
                recommended("proof_of_funds", "Proof of Funds"),
                recommended("police_certificate", "Police Clearance Certificate"),
                recommended("resume", "Resume / CV"),
            ],
            total_required: 4,
            description: "Canadian work permit",
        },
    ),
    (
        "tourist-canada",
        VisaRequirements {
            required: &[
                critical("passport", "Valid Passport"),
                critical("proof_of_funds", "Proof of Funds"),
                critical("travel_itinerary", "Travel Itinerary"),
                recommended("ties_to_home", "Proof of Ties to Home Country"),
                recommended("invitation_letter", "Letter of Invitation"),
            ],
            total_required: 3,
            description: "Canadian visitor visa",
        },
    ),
    (
        "student-usa",
        VisaRequirements {
            required: &[
                critical("passport", "Valid Passport"),
                critical("i20_form", "Form I-20"),
                critical("sevis_fee", "SEVIS Fee Receipt"),
                critical("ds160_confirmation", "DS-160 Confirmation Page"),
                critical("proof_of_funds", "Proof of Funds"),
                recommended("academic_transcripts", "Academic Transcripts"),
            ],
            total_required: 5,
            description: "US F-1 student visa",
        },
    ),
    (
        "work-usa",
        VisaRequirements {
            required: &[
                critical("passport", "Valid Passport"),
                critical("job_offer", "Job Offer Letter"),
                critical("petition_approval", "Approved Petition (Form I-797)"),
                critical("ds160_confirmation", "DS-160 Confirmation Page"),
                recommended("educational_credentials", "Educational Credentials"),
                recommended("resume", "Resume / CV"),
            ],
            total_required: 4,
            description: "US employment visa",
        },
    ),
    (
        "tourist-usa",
        VisaRequirements {
            required: &[
                critical("passport", "Valid Passport"),
                critical("ds160_confirmation", "DS-160 Confirmation Page"),
                critical("proof_of_funds", "Proof of Funds"),
                recommended("travel_itinerary", "Travel Itinerary"),
                recommended("ties_to_home", "Proof of Ties to Home Country"),
            ],
            total_required: 3,
            description: "US B-2 visitor visa",
        },
    ),
    (
        "student-uk",
        VisaRequirements {
            required: &[
                critical("passport", "Valid Passport"),
                critical("cas_letter", "Confirmation of Acceptance for Studies"),
                critical("proof_of_funds", "Proof of Funds"),
                critical("language_test", "English Language Test Results"),
                recommended("tb_test", "Tuberculosis Test Results"),
                recommended("academic_transcripts", "Academic Transcripts"),
            ],
            total_required: 4,
            description: "UK Student visa",
        },
    ),
    (
        "work-uk",
        VisaRequirements {
            required: &[
                critical("passport", "Valid Passport"),
                critical("certificate_of_sponsorship", "Certificate of Sponsorship"),
                critical("proof_of_funds", "Proof of Funds"),
                critical("language_test", "English Language Test Results"),
                recommended("criminal_record", "Criminal Record Certificate"),
                recommended("tb_test", "Tuberculosis Test Results"),
            ],
            total_required: 5,
            description: "UK Skilled Worker visa",
        },
    ),
    (
        "tourist-uk",
        VisaRequirements {
            required: &[
                critical("passport", "Valid Passport"),
                critical("proof_of_funds", "Proof of Funds"),
                critical("travel_itinerary", "Travel Itinerary"),
                recommended("employment_letter", "Employment Letter"),
                recommended("accommodation_booking", "Accommodation Booking"),
            ],
            total_required: 3,
            description: "UK Standard Visitor visa",
        },
    ),
    (
        "student-australia",
        VisaRequirements {
            required: &[
                critical("passport", "Valid Passport"),
                critical("coe", "Confirmation of Enrolment"),
                critical("gte_statement", "Genuine Student Statement"),
                critical("proof_of_funds", "Proof of Funds"),
                critical("oshc", "Overseas Student Health Cover"),
                recommended("language_test", "English Language Test Results"),
            ],
            total_required: 5,
            description: "Australian student visa (subclass 500)",
        },
    ),
    (
        "work-australia",
        VisaRequirements {
            required: &[
                critical("passport", "Valid Passport"),
                critical("skills_assessment", "Skills Assessment"),
                critical("nomination_approval", "Employer Nomination Approval"),
                critical("language_test", "English Language Test Results"),
                recommended("police_certificate", "Police Clearance Certificate"),
                recommended("health_exam", "Health Examination"),
            ],
            total_required: 4,
            description: "Australian skilled work visa",
        },
    ),
    (
        "tourist-australia",
        VisaRequirements {
            required: &[
                critical("passport", "Valid Passport"),
                critical("proof_of_funds", "Proof of Funds"),
                critical("travel_itinerary", "Travel Itinerary"),
                critical("ties_to_home", "Proof of Ties to Home Country"),
                recommended("travel_insurance", "Travel Insurance"),
            ],
            total_required: 3,
            description: "Australian visitor visa (subclass 600)",
        },
    ),
];

/// Lower-cased `"{visa_type}-{destination}"` with all whitespace removed.
pub fn catalog_key(visa_type: &str, destination: &str) -> String {
    format!("{visa_type}-{destination}")
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn catalog_keys() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(key, _)| *key)
}

pub fn general_requirements() -> &'static VisaRequirements {
    &GENERAL_REQUIREMENTS
}

pub fn resolve_requirements(visa_type: &str, destination: &str) -> RequirementLookup {
    let key = catalog_key(visa_type, destination);
    match CATALOG.iter().find(|(candidate, _)| *candidate == key) {
        Some((_, requirements)) => RequirementLookup {
            key,
            fallback: false,
            requirements,
        },
        None => RequirementLookup {
            key,
            fallback: true,
            requirements: &GENERAL_REQUIREMENTS,
        },
    }
}

/// Requirement set for the combination, or the general set when none is authored.
pub fn get_visa_specific_requirements(
    visa_type: &str,
    destination: &str,
) -> &'static VisaRequirements {
    resolve_requirements(visa_type, destination).requirements
}
