//! # Application form validation
//!
//! Field rules for the service-application workflow, evaluated per field on
//! blur and exhaustively on submit. Every function is pure; the date rules
//! take `today` as a parameter so tests control the clock.
//!
//! Field keys mirror the form's input names (`fullName`, `mobile`,
//! `dateOfDeath`, plus the document keys from
//! [`crate::services::required_documents`]), so an error map can be joined
//! directly against the rendered inputs.

use chrono::{Months, NaiveDate};
use std::collections::BTreeMap;

use crate::services::{
    is_allowed_document_type, required_documents, ApplicationDraft, MAX_DOCUMENT_BYTES,
};

/// Metadata of a file picked in the browser, enough to validate without
/// shipping the bytes around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub content_type: String,
    pub len: usize,
}

/// Full name: required, at least 3 characters, letters and whitespace only.
/// Unicode letters pass, so names in Devanagari and other scripts validate.
pub fn validate_full_name(value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Full name is required".into());
    }
    if value.chars().count() < 3 {
        return Err("Full name must be at least 3 characters".into());
    }
    if !value.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
        return Err("Full name may contain only letters and spaces".into());
    }
    Ok(())
}

/// Address: required, at least 10 characters.
pub fn validate_address(value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Address is required".into());
    }
    if value.chars().count() < 10 {
        return Err("Address must be at least 10 characters".into());
    }
    Ok(())
}

/// Mobile: exactly 10 digits, leading digit 6–9 (Indian mobile prefixes).
pub fn validate_mobile(value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Mobile number is required".into());
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err("Mobile number may contain digits only".into());
    }
    if value.len() != 10 {
        return Err("Mobile number must be exactly 10 digits".into());
    }
    if !matches!(value.as_bytes()[0], b'6'..=b'9') {
        return Err("Mobile number must start with 6, 7, 8 or 9".into());
    }
    Ok(())
}

/// Deceased name (Death Certificate only): required, at least 3 characters.
pub fn validate_deceased_name(value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Deceased person's name is required".into());
    }
    if value.chars().count() < 3 {
        return Err("Deceased person's name must be at least 3 characters".into());
    }
    Ok(())
}

/// Date of death (Death Certificate only): a valid `YYYY-MM-DD` date, not in
/// the future and not more than 100 years before `today`.
pub fn validate_date_of_death(value: &str, today: NaiveDate) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Date of death is required".into());
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| "Enter the date of death as YYYY-MM-DD".to_string())?;
    if date > today {
        return Err("Date of death cannot be in the future".into());
    }
    let oldest = today
        .checked_sub_months(Months::new(1200))
        .unwrap_or(NaiveDate::MIN);
    if date < oldest {
        return Err("Date of death cannot be more than 100 years ago".into());
    }
    Ok(())
}

/// A picked document: allow-listed type and within the size ceiling.
pub fn validate_document_file(meta: &FileMeta) -> Result<(), String> {
    if !is_allowed_document_type(&meta.content_type) {
        return Err("File must be a JPEG, PNG or PDF".into());
    }
    if meta.len > MAX_DOCUMENT_BYTES {
        return Err(format!(
            "File must be smaller than {} MB",
            MAX_DOCUMENT_BYTES / (1024 * 1024)
        ));
    }
    Ok(())
}

/// Validate the whole draft plus its picked files. Returns a map from field
/// key to message with an entry for every failing field, so the form can
/// flag them all at once. An empty map means the draft is submittable.
pub fn validate_draft(
    draft: &ApplicationDraft,
    files: &BTreeMap<String, FileMeta>,
    today: NaiveDate,
) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();

    if let Err(e) = validate_full_name(&draft.full_name) {
        errors.insert("fullName".to_string(), e);
    }
    if let Err(e) = validate_address(&draft.address) {
        errors.insert("address".to_string(), e);
    }
    if let Err(e) = validate_mobile(&draft.mobile) {
        errors.insert("mobile".to_string(), e);
    }

    if draft.service_type.needs_deceased_details() {
        if let Err(e) = validate_deceased_name(&draft.deceased_name) {
            errors.insert("deceasedName".to_string(), e);
        }
        if let Err(e) = validate_date_of_death(&draft.date_of_death, today) {
            errors.insert("dateOfDeath".to_string(), e);
        }
    }

    for spec in required_documents(draft.service_type) {
        match files.get(spec.key) {
            None => {
                errors.insert(spec.key.to_string(), format!("{} is required", spec.label));
            }
            Some(meta) => {
                if let Err(e) = validate_document_file(meta) {
                    errors.insert(spec.key.to_string(), e);
                }
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceType;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn pdf(len: usize) -> FileMeta {
        FileMeta {
            content_type: "application/pdf".to_string(),
            len,
        }
    }

    fn draft(service: ServiceType) -> ApplicationDraft {
        ApplicationDraft {
            service_type: service,
            full_name: "Ramesh Patil".to_string(),
            address: "At Post Shivaji Nagar, Ward 4".to_string(),
            mobile: "9876543210".to_string(),
            deceased_name: String::new(),
            date_of_death: String::new(),
        }
    }

    fn all_files(service: ServiceType) -> BTreeMap<String, FileMeta> {
        required_documents(service)
            .iter()
            .map(|spec| (spec.key.to_string(), pdf(100 * 1024)))
            .collect()
    }

    #[test]
    fn accepts_devanagari_names() {
        assert!(validate_full_name("रमेश पाटील").is_ok());
    }

    #[test]
    fn rejects_short_and_non_letter_names() {
        assert!(validate_full_name("").is_err());
        assert!(validate_full_name("Ra").is_err());
        assert!(validate_full_name("R2-D2").is_err());
    }

    #[test]
    fn nine_digit_mobile_fails_with_length_message() {
        let err = validate_mobile("123456789").unwrap_err();
        assert!(err.contains("exactly 10 digits"), "got: {err}");
    }

    #[test]
    fn mobile_leading_digit_must_be_in_range() {
        assert!(validate_mobile("9876543210").is_ok());
        assert!(validate_mobile("1876543210").is_err());
        assert!(validate_mobile("987654321a").is_err());
    }

    #[test]
    fn address_needs_ten_characters() {
        assert!(validate_address("Ward 4").is_err());
        assert!(validate_address("At Post Shivaji Nagar").is_ok());
    }

    #[test]
    fn date_of_death_window() {
        let today = today();
        assert!(validate_date_of_death("2025-06-15", today).is_ok());
        assert!(validate_date_of_death("2025-06-16", today).is_err());
        assert!(validate_date_of_death("1925-06-16", today).is_ok());
        assert!(validate_date_of_death("1925-06-14", today).is_err());
        assert!(validate_date_of_death("not-a-date", today).is_err());
    }

    #[test]
    fn oversized_and_wrong_type_files_are_rejected() {
        assert!(validate_document_file(&pdf(MAX_DOCUMENT_BYTES)).is_ok());
        assert!(validate_document_file(&pdf(MAX_DOCUMENT_BYTES + 1)).is_err());
        let gif = FileMeta {
            content_type: "image/gif".to_string(),
            len: 1024,
        };
        assert!(validate_document_file(&gif).is_err());
    }

    #[test]
    fn complete_draft_validates_clean() {
        let service = ServiceType::IncomeCertificate;
        let errors = validate_draft(&draft(service), &all_files(service), today());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn all_failures_surface_together() {
        let mut d = draft(ServiceType::DeathCertificate);
        d.full_name = "R".to_string();
        d.mobile = "123456789".to_string();
        d.deceased_name.clear();
        d.date_of_death.clear();

        let errors = validate_draft(&d, &BTreeMap::new(), today());
        assert!(errors.contains_key("fullName"));
        assert!(errors.contains_key("mobile"));
        assert!(errors.contains_key("deceasedName"));
        assert!(errors.contains_key("dateOfDeath"));
        // Every required document is reported missing, not just the first.
        for spec in required_documents(ServiceType::DeathCertificate) {
            assert!(errors.contains_key(spec.key), "missing {}", spec.key);
        }
    }

    #[test]
    fn missing_documents_depend_only_on_service_type() {
        let service = ServiceType::ResidenceCertificate;
        let mut files = all_files(service);
        files.remove("electricityBill");

        let errors = validate_draft(&draft(service), &files, today());
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("electricityBill"));
    }

    #[test]
    fn deceased_fields_ignored_for_non_death_services() {
        let service = ServiceType::BirthCertificate;
        let mut d = draft(service);
        d.deceased_name.clear();
        d.date_of_death.clear();
        let errors = validate_draft(&d, &all_files(service), today());
        assert!(errors.is_empty());
    }
}
