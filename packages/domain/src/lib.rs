//! # Domain crate — shared types and rules for the Gram Panchayat portal
//!
//! Everything the web client and the server functions agree on lives here:
//! the client-safe DTOs for each content type, the closed status enums with
//! their canonical spellings, the service catalogue with its per-service
//! required-document table, and the applicant/document validation rules.
//!
//! The crate is pure — no I/O, no async — so every rule is unit-testable in
//! isolation from rendering and from the database.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Entity DTOs (`Serialize + Deserialize + PartialEq`, WASM-safe), status enums, notice ordering |
//! | [`services`] | [`ServiceType`](services::ServiceType) catalogue, required-document lookup table, upload limits |
//! | [`validate`] | Field-level and whole-draft validation for the service application form |

pub mod models;
pub mod services;
pub mod validate;

pub use models::{
    ApplicationInfo, ApplicationStatus, ComplaintInfo, ComplaintStatus, ContactInfo, GalleryImageInfo,
    NoticeInfo, PanchayatRole, ProfileInfo, ProjectInfo, ProjectInput, ProjectStatus, Role,
    SchemeInfo, SchemeInput, SchemeType, UserInfo, VillageProfileInfo, sort_notices,
};
pub use services::{
    ApplicationDraft, DocumentSpec, DocumentUpload, ServiceType, MAX_DOCUMENT_BYTES,
    required_documents,
};
