//! # Service catalogue and required-document table
//!
//! The certificate services a citizen can apply for, and — per service — the
//! exact set of documents the application form must collect. The table is the
//! single source of truth: the form renders one file input per entry, the
//! validator demands every entry, and the server rejects submissions missing
//! any of them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest accepted document upload, applied uniformly to every document
/// kind on both the client and the server.
pub const MAX_DOCUMENT_BYTES: usize = 2 * 1024 * 1024;

/// MIME types accepted for application documents.
pub const ALLOWED_DOCUMENT_TYPES: [&str; 3] = ["image/jpeg", "image/png", "application/pdf"];

/// MIME types accepted for gallery / profile photos.
pub const ALLOWED_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

pub fn is_allowed_document_type(content_type: &str) -> bool {
    ALLOWED_DOCUMENT_TYPES.contains(&content_type)
}

pub fn is_allowed_image_type(content_type: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&content_type)
}

/// Certificate services offered by the Panchayat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    BirthCertificate,
    DeathCertificate,
    IncomeCertificate,
    ResidenceCertificate,
    MarriageCertificate,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        ServiceType::BirthCertificate,
        ServiceType::DeathCertificate,
        ServiceType::IncomeCertificate,
        ServiceType::ResidenceCertificate,
        ServiceType::MarriageCertificate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::BirthCertificate => "Birth Certificate",
            ServiceType::DeathCertificate => "Death Certificate",
            ServiceType::IncomeCertificate => "Income Certificate",
            ServiceType::ResidenceCertificate => "Residence Certificate",
            ServiceType::MarriageCertificate => "Marriage Certificate",
        }
    }

    /// One-line blurb shown on the services catalogue page.
    pub fn description(&self) -> &'static str {
        match self {
            ServiceType::BirthCertificate => {
                "Apply for an official birth certificate issued by the Gram Panchayat."
            }
            ServiceType::DeathCertificate => "Apply for a death certificate for official records.",
            ServiceType::IncomeCertificate => {
                "Certificate of income for scheme and education eligibility."
            }
            ServiceType::ResidenceCertificate => "Proof of residence for government services.",
            ServiceType::MarriageCertificate => "Legal marriage registration certificate.",
        }
    }

    /// Whether the form collects the deceased-person fields.
    pub fn needs_deceased_details(&self) -> bool {
        matches!(self, ServiceType::DeathCertificate)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        ServiceType::ALL
            .iter()
            .find(|t| t.as_str().to_lowercase() == needle)
            .copied()
            .ok_or_else(|| format!("unknown service type: {s}"))
    }
}

/// One required document slot in the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSpec {
    /// Form field name, also the key under which the stored URL is kept.
    pub key: &'static str,
    /// Human-readable label for the file input.
    pub label: &'static str,
}

const BIRTH_DOCUMENTS: [DocumentSpec; 3] = [
    DocumentSpec { key: "hospitalSlip", label: "Hospital slip" },
    DocumentSpec { key: "parentsAadhaar", label: "Parents' Aadhaar" },
    DocumentSpec { key: "addressProof", label: "Address proof" },
];

const DEATH_DOCUMENTS: [DocumentSpec; 4] = [
    DocumentSpec { key: "hospitalDeathSlip", label: "Hospital death slip" },
    DocumentSpec { key: "deceasedAadhaar", label: "Aadhaar of the deceased" },
    DocumentSpec { key: "applicantAadhaar", label: "Applicant's Aadhaar" },
    DocumentSpec { key: "addressProof", label: "Address proof" },
];

const INCOME_DOCUMENTS: [DocumentSpec; 3] = [
    DocumentSpec { key: "aadhaar", label: "Aadhaar card" },
    DocumentSpec { key: "rationCard", label: "Ration card" },
    DocumentSpec { key: "incomeProof", label: "Income proof" },
];

const RESIDENCE_DOCUMENTS: [DocumentSpec; 3] = [
    DocumentSpec { key: "aadhaar", label: "Aadhaar card" },
    DocumentSpec { key: "electricityBill", label: "Electricity bill" },
    DocumentSpec { key: "rationCard", label: "Ration card" },
];

const MARRIAGE_DOCUMENTS: [DocumentSpec; 4] = [
    DocumentSpec { key: "ageProof", label: "Age proof" },
    DocumentSpec { key: "addressProof", label: "Address proof" },
    DocumentSpec { key: "marriageInvitation", label: "Marriage invitation" },
    DocumentSpec { key: "photos", label: "Couple photograph" },
];

/// The full document set a service demands. Pure function of the service
/// type alone.
pub fn required_documents(service: ServiceType) -> &'static [DocumentSpec] {
    match service {
        ServiceType::BirthCertificate => &BIRTH_DOCUMENTS,
        ServiceType::DeathCertificate => &DEATH_DOCUMENTS,
        ServiceType::IncomeCertificate => &INCOME_DOCUMENTS,
        ServiceType::ResidenceCertificate => &RESIDENCE_DOCUMENTS,
        ServiceType::MarriageCertificate => &MARRIAGE_DOCUMENTS,
    }
}

/// Applicant-entered text fields of the application form, exactly as typed.
/// The date stays a raw `YYYY-MM-DD` string until validation parses it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationDraft {
    pub service_type: ServiceType,
    pub full_name: String,
    pub address: String,
    pub mobile: String,
    pub deceased_name: String,
    pub date_of_death: String,
}

impl ApplicationDraft {
    /// Empty draft for a service, used both initially and after a
    /// successful submission resets the form.
    pub fn new(service_type: ServiceType) -> Self {
        Self {
            service_type,
            full_name: String::new(),
            address: String::new(),
            mobile: String::new(),
            deceased_name: String::new(),
            date_of_death: String::new(),
        }
    }
}

/// A document travelling from the browser to the server inside the
/// submission payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentUpload {
    /// Document key from [`DocumentSpec::key`] (or a fixed name for
    /// single-attachment forms such as notices).
    pub key: String,
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_service_demands_at_least_three_documents() {
        for service in ServiceType::ALL {
            assert!(
                required_documents(service).len() >= 3,
                "{service} has too few document slots"
            );
        }
    }

    #[test]
    fn document_sets_are_stable_across_calls() {
        for service in ServiceType::ALL {
            assert_eq!(required_documents(service), required_documents(service));
        }
    }

    #[test]
    fn document_keys_are_unique_within_a_service() {
        for service in ServiceType::ALL {
            let specs = required_documents(service);
            for (i, a) in specs.iter().enumerate() {
                for b in &specs[i + 1..] {
                    assert_ne!(a.key, b.key, "duplicate key in {service}");
                }
            }
        }
    }

    #[test]
    fn death_certificate_collects_deceased_details_others_do_not() {
        for service in ServiceType::ALL {
            assert_eq!(
                service.needs_deceased_details(),
                service == ServiceType::DeathCertificate
            );
        }
    }

    #[test]
    fn service_type_round_trips_and_parses_loosely() {
        for service in ServiceType::ALL {
            assert_eq!(service.as_str().parse(), Ok(service));
        }
        assert_eq!(
            "birth certificate".parse(),
            Ok(ServiceType::BirthCertificate)
        );
        assert!("Voter Card".parse::<ServiceType>().is_err());
    }

    #[test]
    fn document_type_allowlist() {
        assert!(is_allowed_document_type("image/jpeg"));
        assert!(is_allowed_document_type("application/pdf"));
        assert!(!is_allowed_document_type("image/gif"));
        assert!(!is_allowed_document_type("application/zip"));
        assert!(is_allowed_image_type("image/png"));
        assert!(!is_allowed_image_type("application/pdf"));
    }
}
