// Admission desk - category routing and requirement records
//
// Queries about admissions are answered from a fixed requirements table
// keyed by admission category. Keyword routing picks the category and the
// facets the user asked for; with no facet keywords everything is returned.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionType {
    Domestic,
    International,
    Nri,
    Transfer,
}

#[derive(Debug, Clone)]
pub struct AdmissionRequirements {
    pub documents: &'static [&'static str],
    pub eligibility: &'static str,
    pub contact_email: &'static str,
    pub procedure: &'static str,
    pub deadlines: &'static [(&'static str, &'static str)],
}

const DOMESTIC: AdmissionRequirements = AdmissionRequirements {
    documents: &[
        "10th Mark Sheet",
        "12th Mark Sheet",
        "SRMJEEE Score Card",
        "Aadhar Card",
        "Passport size photographs",
    ],
    eligibility: "Minimum 60% in PCM for Engineering",
    contact_email: "admissions@srmist.edu.in",
    procedure: "Apply through SRMJEEE and counselling",
    deadlines: &[("SRMJEEE Registration", "April 30"), ("Counselling", "June-July")],
};

const INTERNATIONAL: AdmissionRequirements = AdmissionRequirements {
    documents: &[
        "High School Transcripts",
        "Standardized Test Scores (SAT/ACT)",
        "English Proficiency (IELTS/TOEFL)",
        "Passport",
        "Statement of Purpose",
    ],
    eligibility: "Completed 12 years of education with good academic record",
    contact_email: "admissions.ir@srmist.edu.in",
    procedure: "Apply through International Admissions Portal",
    deadlines: &[("Fall Semester", "June 30"), ("Spring Semester", "December 15")],
};

const NRI: AdmissionRequirements = AdmissionRequirements {
    documents: &[
        "NRI Status Proof",
        "Passport copies",
        "Academic transcripts",
        "Bank statements",
    ],
    eligibility: "NRI/NRI Sponsored candidates",
    contact_email: "nri.admissions@srmist.edu.in",
    procedure: "Direct admission through NRI quota",
    deadlines: &[("Application", "May 31"), ("Admission", "June 30")],
};

const TRANSFER: AdmissionRequirements = AdmissionRequirements {
    documents: &[
        "Current University Transcripts",
        "No Objection Certificate",
        "Migration Certificate",
        "Syllabus of completed courses",
    ],
    eligibility: "Completed at least one year at recognized university",
    contact_email: "transfer.admissions@srmist.edu.in",
    procedure: "Apply with complete transcripts for credit transfer",
    deadlines: &[("Fall Transfer", "July 15"), ("Spring Transfer", "December 31")],
};

#[derive(Debug, Clone, Default)]
pub struct AdmissionDesk;

impl AdmissionDesk {
    pub fn new() -> Self {
        Self
    }

    pub fn requirements(&self, admission_type: AdmissionType) -> &'static AdmissionRequirements {
        match admission_type {
            AdmissionType::Domestic => &DOMESTIC,
            AdmissionType::International => &INTERNATIONAL,
            AdmissionType::Nri => &NRI,
            AdmissionType::Transfer => &TRANSFER,
        }
    }

    /// Category routing; defaults to domestic when nothing more specific
    /// is mentioned.
    pub fn determine_type(&self, normalized_query: &str) -> AdmissionType {
        let q = normalized_query;
        if contains_any(q, &["international", "foreign", "abroad", "overseas"]) {
            AdmissionType::International
        } else if contains_any(q, &["nri", "non resident"]) {
            AdmissionType::Nri
        } else if contains_any(q, &["transfer", "change university", "credit transfer"]) {
            AdmissionType::Transfer
        } else {
            AdmissionType::Domestic
        }
    }

    /// Build the answer text for an admission query.
    pub fn answer(&self, normalized_query: &str) -> String {
        let requirements = self.requirements(self.determine_type(normalized_query));
        let q = normalized_query;

        let mut sections = Vec::new();
        if contains_any(q, &["document", "require", "submit"]) {
            sections.push(format_documents(requirements));
        }
        if contains_any(q, &["eligible", "eligibility", "qualify"]) {
            sections.push(format!("Eligibility: {}", requirements.eligibility));
        }
        if contains_any(q, &["procedure", "process", "how to", "how do", "steps"]) {
            sections.push(format!("Procedure: {}", requirements.procedure));
        }
        if contains_any(q, &["deadline", "date", "when"]) {
            sections.push(format_deadlines(requirements));
        }
        if contains_any(q, &["contact", "email", "reach"]) {
            sections.push(format!("Contact: {}", requirements.contact_email));
        }

        // No facet keywords: return the full picture
        if sections.is_empty() {
            sections = vec![
                format_documents(requirements),
                format!("Eligibility: {}", requirements.eligibility),
                format!("Procedure: {}", requirements.procedure),
                format_deadlines(requirements),
                format!("Contact: {}", requirements.contact_email),
            ];
        }

        sections.join("\n\n")
    }
}

fn format_documents(requirements: &AdmissionRequirements) -> String {
    let docs: Vec<String> = requirements.documents.iter().map(|d| format!("- {}", d)).collect();
    format!("Documents required:\n{}", docs.join("\n"))
}

fn format_deadlines(requirements: &AdmissionRequirements) -> String {
    let lines: Vec<String> = requirements
        .deadlines
        .iter()
        .map(|(name, date)| format!("- {}: {}", name, date))
        .collect();
    format!("Deadlines:\n{}", lines.join("\n"))
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}
